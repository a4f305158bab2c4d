/// Leading character marking an attribute value as an expression to emit
/// verbatim, e.g. `$form.action`.
pub const EXPRESSION_SENTINEL: char = '$';

/// Leading character marking an attribute value as a reference to emit
/// verbatim, e.g. `@parent`.
pub const REFERENCE_SENTINEL: char = '@';

/// Generated-code spelling of "no value".
pub const NULL_LITERAL: &str = "null";

/// Sentinel and null-literal configuration for the quoting rule.
///
/// The defaults are the conventional values of the generated-code syntax;
/// vocabularies targeting a different syntax can supply their own via the
/// `_with` function variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteOptions {
    pub expression_sentinel: char,
    pub reference_sentinel: char,
    pub null_literal: &'static str,
}

impl Default for QuoteOptions {
    fn default() -> Self {
        Self {
            expression_sentinel: EXPRESSION_SENTINEL,
            reference_sentinel: REFERENCE_SENTINEL,
            null_literal: NULL_LITERAL,
        }
    }
}

/// A classified attribute value.
///
/// The tag is inferred from the raw text's leading character, never stored
/// in markup: a sentinel prefix makes the value an [`AttrValue::Expression`],
/// anything else (including the empty string) is an [`AttrValue::Literal`],
/// and only a missing attribute is [`AttrValue::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Text emitted as a single-quoted string constant.
    Literal(String),
    /// Expression or reference text emitted verbatim.
    Expression(String),
    /// No value; emitted as the null literal.
    Absent,
}

impl AttrValue {
    pub fn classify(value: Option<&str>) -> Self {
        Self::classify_with(value, &QuoteOptions::default())
    }

    pub fn classify_with(value: Option<&str>, options: &QuoteOptions) -> Self {
        match value {
            None => AttrValue::Absent,
            Some(value) => match value.chars().next() {
                Some(first)
                    if first == options.expression_sentinel
                        || first == options.reference_sentinel =>
                {
                    AttrValue::Expression(value.to_string())
                }
                _ => AttrValue::Literal(value.to_string()),
            },
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AttrValue::Absent)
    }

    /// The generated-code spelling of this value.
    pub fn to_code(&self) -> String {
        self.to_code_with(&QuoteOptions::default())
    }

    pub fn to_code_with(&self, options: &QuoteOptions) -> String {
        match self {
            AttrValue::Literal(text) => format!("'{text}'"),
            AttrValue::Expression(text) => text.clone(),
            AttrValue::Absent => options.null_literal.to_string(),
        }
    }
}

/// Applies the quoting rule: absent values become the null literal,
/// sentinel-prefixed values pass through verbatim, everything else is
/// wrapped in single quotes.
///
/// Pure function of the value alone; calling it twice yields the same
/// result.
pub fn quote(value: Option<&str>) -> String {
    quote_with(value, &QuoteOptions::default())
}

pub fn quote_with(value: Option<&str>, options: &QuoteOptions) -> String {
    AttrValue::classify_with(value, options).to_code_with(options)
}
