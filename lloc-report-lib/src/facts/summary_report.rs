use super::{Files, Functions, Item};
use crate::Result;
use camino::Utf8Path;
use ohno::app_err;
use roxmltree::{Document, Node};
use std::fs;

const LOG_TARGET: &str = "    source";

const FILES_SECTION: &str = "files";
const FILE_ELEMENT: &str = "file";
const PACKAGE_SECTION: &str = "package";
const FUNCTION_ELEMENT: &str = "function";
const NAME_ATTRIBUTE: &str = "name";

/// The file and function populations of one pDepend summary report.
#[derive(Debug, Clone, Default)]
pub struct SummaryReport {
    files: Files,
    functions: Functions,
}

impl SummaryReport {
    /// Read and parse the summary report at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not well-formed XML, or
    /// holds an item whose metric attribute is not a non-negative integer.
    pub fn load(path: &Utf8Path, metric_attribute: &str) -> Result<Self> {
        log::info!(target: LOG_TARGET, "Loading summary report '{path}'");

        let text = fs::read_to_string(path)
            .map_err(|e| app_err!("the XML file '{path}' does not seem to be valid: it cannot be read: {e}"))?;

        Self::parse(&text, metric_attribute).map_err(|e| app_err!("the XML file '{path}' does not seem to be valid: {e}"))
    }

    /// Parse a summary report from its XML text.
    ///
    /// Items are the `file` children of the first `files` section and the
    /// `function` children of the first `package` section. A missing section
    /// yields an empty collection, and an item without the metric attribute
    /// counts as zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not well-formed XML or an item's metric
    /// attribute is not a non-negative integer.
    pub fn parse(text: &str, metric_attribute: &str) -> Result<Self> {
        let doc = Document::parse(text).map_err(|e| app_err!("it cannot be parsed as XML: {e}"))?;
        let root = doc.root_element();

        let files = section_items(root, FILES_SECTION, FILE_ELEMENT, metric_attribute)?;
        let functions = section_items(root, PACKAGE_SECTION, FUNCTION_ELEMENT, metric_attribute)?;

        log::debug!(
            target: LOG_TARGET,
            "Found {} file(s) and {} function(s) using the '{metric_attribute}' attribute",
            files.len(),
            functions.len()
        );

        Ok(Self {
            files: Files::new(files),
            functions: Functions::new(functions),
        })
    }

    #[must_use]
    pub const fn files(&self) -> &Files {
        &self.files
    }

    #[must_use]
    pub const fn functions(&self) -> &Functions {
        &self.functions
    }
}

fn section_items(root: Node<'_, '_>, section: &str, element: &str, metric_attribute: &str) -> Result<Vec<Item>> {
    let Some(section_node) = root.children().find(|node| node.has_tag_name(section)) else {
        log::warn!(target: LOG_TARGET, "No '{section}' section in the report, treating it as empty");
        return Ok(Vec::new());
    };

    section_node
        .children()
        .filter(|node| node.has_tag_name(element))
        .map(|node| read_item(node, metric_attribute))
        .collect()
}

fn read_item(node: Node<'_, '_>, metric_attribute: &str) -> Result<Item> {
    let kind = node.tag_name().name();
    let name = node.attribute(NAME_ATTRIBUTE).unwrap_or_default();

    let metric = match node.attribute(metric_attribute) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| app_err!("{kind} '{name}' has an invalid '{metric_attribute}' value '{raw}': {e}"))?,
        None => {
            log::debug!(target: LOG_TARGET, "{kind} '{name}' has no '{metric_attribute}' attribute, counting it as 0");
            0
        }
    };

    Ok(Item::new(name, metric))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ItemSource;

    const SUMMARY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metrics generated="2013-06-04T10:00:00" pdepend="1.1.0">
  <files>
    <file name="a.php" cloc="2" lloc="10" loc="14"/>
    <file name="b.php" cloc="0" lloc="30" loc="31"/>
  </files>
  <package name="+global">
    <class name="Widget" lloc="12">
      <file name="a.php"/>
      <method name="render" lloc="7"/>
    </class>
    <function name="f" lloc="5" loc="6">
      <file name="b.php"/>
    </function>
  </package>
  <package name="other">
    <function name="g" lloc="99"/>
  </package>
</metrics>"#;

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_parse_files_and_functions() {
        let report = SummaryReport::parse(SUMMARY, "lloc").unwrap();

        assert_eq!(
            report.files().items(),
            &[Item::new("a.php", 10), Item::new("b.php", 30)]
        );
        assert_eq!(report.functions().items(), &[Item::new("f", 5)]);
    }

    #[test]
    fn test_only_first_package_contributes_functions() {
        let report = SummaryReport::parse(SUMMARY, "lloc").unwrap();
        assert_eq!(names(report.functions().items()), ["f"]);
    }

    #[test]
    fn test_nested_file_references_are_not_file_items() {
        let report = SummaryReport::parse(SUMMARY, "lloc").unwrap();
        assert_eq!(report.files().items().len(), 2);
    }

    #[test]
    fn test_alternate_metric_attribute() {
        let report = SummaryReport::parse(SUMMARY, "loc").unwrap();
        assert_eq!(
            report.files().items(),
            &[Item::new("a.php", 14), Item::new("b.php", 31)]
        );
        assert_eq!(report.functions().items(), &[Item::new("f", 6)]);
    }

    #[test]
    fn test_missing_attribute_counts_as_zero() {
        let report = SummaryReport::parse(SUMMARY, "cloc").unwrap();
        assert_eq!(
            report.files().items(),
            &[Item::new("a.php", 2), Item::new("b.php", 0)]
        );
        assert_eq!(report.functions().items(), &[Item::new("f", 0)]);
    }

    #[test]
    fn test_missing_name_is_empty() {
        let report = SummaryReport::parse(r#"<metrics><files><file lloc="3"/></files></metrics>"#, "lloc").unwrap();
        assert_eq!(report.files().items(), &[Item::new("", 3)]);
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let report = SummaryReport::parse("<metrics/>", "lloc").unwrap();
        assert!(report.files().items().is_empty());
        assert!(report.functions().items().is_empty());
    }

    #[test]
    fn test_invalid_metric_is_error() {
        let result = SummaryReport::parse(r#"<metrics><files><file name="x.php" lloc="ten"/></files></metrics>"#, "lloc");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("x.php"), "unexpected message: {message}");
        assert!(message.contains("ten"), "unexpected message: {message}");
    }

    #[test]
    fn test_negative_metric_is_error() {
        let result = SummaryReport::parse(r#"<metrics><files><file name="x.php" lloc="-1"/></files></metrics>"#, "lloc");
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let result = SummaryReport::parse("<metrics><files></metrics>", "lloc");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("cannot be parsed"), "unexpected message: {message}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::try_from(tmp.path().join("summary.xml")).unwrap();
        fs::write(&path, SUMMARY).unwrap();

        let report = SummaryReport::load(&path, "lloc").unwrap();
        assert_eq!(names(report.files().items()), ["a.php", "b.php"]);
    }

    #[test]
    fn test_load_missing_file_names_the_file() {
        let message = SummaryReport::load(Utf8Path::new("does/not/exist.xml"), "lloc")
            .unwrap_err()
            .to_string();
        assert!(message.contains("does/not/exist.xml"), "unexpected message: {message}");
    }
}
