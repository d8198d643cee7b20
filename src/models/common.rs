use std::collections::BTreeMap;
use std::fmt;

/// Field identifier of a form, parsed from and printed as its input name.
pub trait FieldName: Copy + Ord + fmt::Debug {
    fn name(&self) -> &'static str;
    fn parse(name: &str) -> Option<Self>;
}

// Declares a form's field enum together with its FieldName impl
macro_rules! form_fields {
    ($(#[$meta:meta])* $vis:vis enum $ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $ty {
            $($variant),+
        }

        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];
        }

        impl $crate::models::common::FieldName for $ty {
            fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }

            fn parse(name: &str) -> Option<Self> {
                match name {
                    $($name => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::models::common::FieldName::name(self))
            }
        }
    };
}

pub(crate) use form_fields;

/// Current validation message per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<F: FieldName> {
    errors: BTreeMap<F, String>,
}

impl<F: FieldName> Default for ErrorMap<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FieldName> ErrorMap<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drops the message of a single field, leaving the others in place.
    pub fn clear_field(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Input names of the fields currently in error.
    pub fn field_names(&self) -> Vec<String> {
        self.errors.keys().map(|f| f.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// User-facing message shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

/// Submission bookkeeping embedded in every form that talks to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub in_flight: bool,
    pub notice: Option<Notice>,
}

/// Result of a completed submit, for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: Notice,
    pub navigate_to: Option<&'static str>,
}
