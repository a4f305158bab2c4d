use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

type ElementName = SmolStr;
type AttrName = SmolStr;

/// Errors raised during tag dispatch and attribute extraction.
///
/// All variants are fatal to the current compilation pass: nothing is
/// recovered locally, no partial output is committed for the failing
/// element, and the error unwinds to the embedding compiler.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("missing required attribute \"{attribute}\" on <{element}>")]
    MissingRequiredAttribute {
        element: ElementName,
        attribute: AttrName,
    },
    #[error("no tag handler resolves <{qualified_name}>")]
    UnresolvedHandler { qualified_name: ElementName },
    #[error("\"{name}\" is reserved by the tag handler contract of {handler}")]
    ReservedMethodInvocation {
        handler: &'static str,
        name: SmolStr,
    },
    #[error("invalid boolean literal \"{value}\" in attribute \"{attribute}\" on <{element}>")]
    InvalidBooleanLiteral {
        element: ElementName,
        attribute: AttrName,
        value: String,
    },
}

impl Diagnostic for TagError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            TagError::MissingRequiredAttribute { .. } => "TagError::MissingRequiredAttribute",
            TagError::UnresolvedHandler { .. } => "TagError::UnresolvedHandler",
            TagError::ReservedMethodInvocation { .. } => "TagError::ReservedMethodInvocation",
            TagError::InvalidBooleanLiteral { .. } => "TagError::InvalidBooleanLiteral",
        };

        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let msg = match self {
            TagError::MissingRequiredAttribute { attribute, .. } => {
                format!("Add the \"{attribute}\" attribute to the element.")
            }
            TagError::UnresolvedHandler { qualified_name } => {
                format!(
                    "No handler function is registered for the local name of <{qualified_name}>. \
                     Check the tag name for typos, or register the tag in the vocabulary."
                )
            }
            TagError::ReservedMethodInvocation { name, .. } => {
                format!(
                    "\"{name}\" names infrastructure of the tag handler contract and cannot be \
                     invoked from markup. Register the tag under a different name."
                )
            }
            TagError::InvalidBooleanLiteral { attribute, .. } => {
                format!(
                    "The \"{attribute}\" attribute accepts only \"true\", \"yes\", \"false\" or \
                     \"no\"."
                )
            }
        };

        Some(Box::new(msg))
    }
}
