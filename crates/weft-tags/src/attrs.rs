use smol_str::SmolStr;
use weft_markup::Element;

use crate::error::TagError;
use crate::quote;

/// One entry of an attribute specification driving [`attrs`] and
/// [`attr_string`]: a bare name (default absent) or a name with a default.
///
/// Specs are usually written inline via the `From` conversions:
///
/// ```rust
/// use weft_tags::AttrSpec;
///
/// let spec: Vec<AttrSpec> = vec!["name".into(), ("size", "20").into()];
/// assert_eq!(spec[1].default(), Some("20"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrSpec<'a> {
    Name(&'a str),
    WithDefault(&'a str, &'a str),
}

impl<'a> AttrSpec<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            AttrSpec::Name(name) => name,
            AttrSpec::WithDefault(name, _) => name,
        }
    }

    pub fn default(&self) -> Option<&'a str> {
        match self {
            AttrSpec::Name(_) => None,
            AttrSpec::WithDefault(_, default) => Some(default),
        }
    }
}

impl<'a> From<&'a str> for AttrSpec<'a> {
    fn from(name: &'a str) -> Self {
        AttrSpec::Name(name)
    }
}

impl<'a> From<(&'a str, &'a str)> for AttrSpec<'a> {
    fn from((name, default): (&'a str, &'a str)) -> Self {
        AttrSpec::WithDefault(name, default)
    }
}

/// Reads a mandatory attribute and applies the quoting rule to it.
pub fn required_attr(element: &Element, name: &str) -> Result<String, TagError> {
    required_attr_unquoted(element, name).map(|value| quote::quote(Some(&value)))
}

/// Reads a mandatory attribute verbatim.
pub fn required_attr_unquoted(element: &Element, name: &str) -> Result<String, TagError> {
    element
        .attribute(name)
        .map(str::to_string)
        .ok_or_else(|| TagError::MissingRequiredAttribute {
            element: element.qualified_name().into(),
            attribute: name.into(),
        })
}

/// Reads an attribute and applies the quoting rule, falling back to
/// `default`. The default is itself subject to quoting, so a sentinel-led
/// default passes through verbatim and `None` becomes the null literal.
pub fn attr(element: &Element, name: &str, default: Option<&str>) -> String {
    quote::quote(element.attribute(name).or(default))
}

/// Reads an attribute verbatim, falling back to `default` with no quoting
/// applied to either.
pub fn attr_unquoted(element: &Element, name: &str, default: Option<&str>) -> Option<String> {
    element
        .attribute(name)
        .or(default)
        .map(str::to_string)
}

/// Reads a boolean attribute: `"true"`/`"yes"` and `"false"`/`"no"` are the
/// only accepted literals; an absent attribute yields `default`.
pub fn attr_bool(element: &Element, name: &str, default: bool) -> Result<bool, TagError> {
    match element.attribute(name) {
        None => Ok(default),
        Some("true") | Some("yes") => Ok(true),
        Some("false") | Some("no") => Ok(false),
        Some(other) => Err(TagError::InvalidBooleanLiteral {
            element: element.qualified_name().into(),
            attribute: name.into(),
            value: other.to_string(),
        }),
    }
}

/// Batch-reads a named set of attributes into an ordered mapping.
///
/// Entries resolve through [`attr_unquoted`]; only present values (explicit
/// attribute or non-absent default) are included, in spec order.
pub fn attrs(element: &Element, spec: &[AttrSpec]) -> Vec<(SmolStr, String)> {
    spec.iter()
        .filter_map(|entry| {
            attr_unquoted(element, entry.name(), entry.default())
                .map(|value| (SmolStr::new(entry.name()), value))
        })
        .collect()
}

/// Batch-reads a named set of attributes into a ` name="value"` fragment
/// directly splice-able into an output tag string. Each token keeps its
/// leading space.
pub fn attr_string(element: &Element, spec: &[AttrSpec]) -> String {
    attrs(element, spec)
        .iter()
        .map(|(name, value)| format!(" {name}=\"{value}\""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use weft_markup::{Document, ElementId};

    #[fixture]
    fn doc() -> (Document, ElementId) {
        let mut doc = Document::new();
        let id = doc.append(None, "w:input");
        doc.set_attribute(id, "name", "login");
        doc.set_attribute(id, "value", "$form.login");
        doc.set_attribute(id, "size", "20");
        (doc, id)
    }

    #[rstest]
    fn test_required_attr(doc: (Document, ElementId)) {
        let (doc, id) = doc;

        assert_eq!(required_attr(&doc[id], "name").unwrap(), "'login'");
        assert_eq!(required_attr(&doc[id], "value").unwrap(), "$form.login");
        assert_eq!(
            required_attr_unquoted(&doc[id], "name").unwrap(),
            "login"
        );
        assert_eq!(
            required_attr(&doc[id], "missing"),
            Err(TagError::MissingRequiredAttribute {
                element: "w:input".into(),
                attribute: "missing".into(),
            })
        );
    }

    #[rstest]
    #[case::present_literal("name", None, "'login'")]
    #[case::present_expression("value", None, "$form.login")]
    #[case::absent_no_default("missing", None, "null")]
    #[case::absent_literal_default("missing", Some("d"), "'d'")]
    #[case::absent_expression_default("missing", Some("$d"), "$d")]
    fn test_attr(
        doc: (Document, ElementId),
        #[case] name: &str,
        #[case] default: Option<&str>,
        #[case] expected: &str,
    ) {
        let (doc, id) = doc;
        assert_eq!(attr(&doc[id], name, default), expected);
    }

    #[rstest]
    fn test_attr_unquoted(doc: (Document, ElementId)) {
        let (doc, id) = doc;

        assert_eq!(
            attr_unquoted(&doc[id], "name", None),
            Some("login".to_string())
        );
        assert_eq!(
            attr_unquoted(&doc[id], "value", None),
            Some("$form.login".to_string())
        );
        assert_eq!(
            attr_unquoted(&doc[id], "missing", Some("$d")),
            Some("$d".to_string())
        );
        assert_eq!(attr_unquoted(&doc[id], "missing", None), None);
    }

    #[rstest]
    #[case::yes("yes", false, Ok(true))]
    #[case::true_("true", false, Ok(true))]
    #[case::no("no", true, Ok(false))]
    #[case::false_("false", true, Ok(false))]
    fn test_attr_bool(
        #[case] value: &str,
        #[case] default: bool,
        #[case] expected: Result<bool, TagError>,
    ) {
        let mut doc = Document::new();
        let id = doc.append(None, "w:input");
        doc.set_attribute(id, "readonly", value);

        assert_eq!(attr_bool(&doc[id], "readonly", default), expected);
    }

    #[test]
    fn test_attr_bool_absent_uses_default() {
        let mut doc = Document::new();
        let id = doc.append(None, "w:input");

        assert_eq!(attr_bool(&doc[id], "readonly", true), Ok(true));
        assert_eq!(attr_bool(&doc[id], "readonly", false), Ok(false));
    }

    #[test]
    fn test_attr_bool_rejects_other_literals() {
        let mut doc = Document::new();
        let id = doc.append(None, "w:input");
        doc.set_attribute(id, "readonly", "maybe");

        assert_eq!(
            attr_bool(&doc[id], "readonly", false),
            Err(TagError::InvalidBooleanLiteral {
                element: "w:input".into(),
                attribute: "readonly".into(),
                value: "maybe".to_string(),
            })
        );
    }

    #[test]
    fn test_attrs_collects_in_spec_order() {
        let mut doc = Document::new();
        let id = doc.append(None, "w:input");
        doc.set_attribute(id, "x", "1");

        let spec: Vec<AttrSpec> = vec!["x".into(), ("y", "d").into(), "z".into()];
        let collected = attrs(&doc[id], &spec);

        assert_eq!(
            collected,
            vec![
                (SmolStr::new("x"), "1".to_string()),
                (SmolStr::new("y"), "d".to_string()),
            ]
        );
    }

    #[test]
    fn test_attr_string_tokens_keep_leading_space() {
        let mut doc = Document::new();
        let id = doc.append(None, "w:input");
        doc.set_attribute(id, "x", "1");

        let spec: Vec<AttrSpec> = vec!["x".into(), ("y", "d").into()];
        assert_eq!(attr_string(&doc[id], &spec), " x=\"1\" y=\"d\"");

        let empty_spec: Vec<AttrSpec> = vec!["absent".into()];
        assert_eq!(attr_string(&doc[id], &empty_spec), "");
    }

    #[rstest]
    fn test_extraction_is_idempotent(doc: (Document, ElementId)) {
        let (doc, id) = doc;
        let spec: Vec<AttrSpec> = vec!["name".into(), ("y", "d").into()];

        assert_eq!(attr(&doc[id], "name", None), attr(&doc[id], "name", None));
        assert_eq!(attrs(&doc[id], &spec), attrs(&doc[id], &spec));
        assert_eq!(
            attr_bool(&doc[id], "missing", true),
            attr_bool(&doc[id], "missing", true)
        );
    }
}
