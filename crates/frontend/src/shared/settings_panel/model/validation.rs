use regex::Regex;

use super::visibility::Visibility;

pub const CLASS_INVALID: &str = "invalid";
/// Класс скрытого сообщения об ошибке (скрыто и на десктопе)
pub const CLASS_ERROR_HIDDEN: &str = "hidden md:hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    pub fn from_valid(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }
}

/// Отображение валидности поля и его сообщения об ошибке
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldFeedback {
    pub invalid: bool,
    pub error: Visibility,
}

impl FieldFeedback {
    pub fn field_class(&self) -> &'static str {
        if self.invalid {
            CLASS_INVALID
        } else {
            ""
        }
    }

    pub fn error_class(&self) -> &'static str {
        if self.error.is_visible() {
            ""
        } else {
            CLASS_ERROR_HIDDEN
        }
    }
}

/// `None` when the field has no paired error element: nothing to reflect.
pub fn reflect(validity: Validity, has_error_element: bool) -> Option<FieldFeedback> {
    if !has_error_element {
        return None;
    }
    Some(match validity {
        Validity::Valid => FieldFeedback {
            invalid: false,
            error: Visibility::Hidden,
        },
        Validity::Invalid => FieldFeedback {
            invalid: true,
            error: Visibility::Shown,
        },
    })
}

/// Ограничения значения настройки (аналог `required` + `pattern` в HTML).
///
/// `pattern` уходит в разметку как есть, браузер проверяет ввод сам.
/// Скомпилированная копия проверяет сохранённое значение при отрисовке.
#[derive(Clone, Debug)]
pub struct Constraint {
    required: bool,
    pattern: Option<String>,
    compiled: Option<Regex>,
}

impl Constraint {
    pub fn new(required: bool, pattern: &str) -> Self {
        let pattern = Some(pattern.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        let compiled = pattern.as_deref().and_then(|p| {
            // HTML pattern must match the whole value
            match Regex::new(&format!("^(?:{})$", p)) {
                Ok(re) => Some(re),
                Err(e) => {
                    log::warn!("pattern '{}' not supported for local checks: {}", p, e);
                    None
                }
            }
        });
        Self {
            required,
            pattern,
            compiled,
        }
    }

    pub fn none() -> Self {
        Self::new(false, "")
    }

    pub fn is_empty(&self) -> bool {
        !self.required && self.pattern.is_none()
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn pattern_attr(&self) -> Option<String> {
        self.pattern.clone()
    }

    /// Empty values only fail `required`; an uncompilable pattern never fails
    pub fn check(&self, value: &str) -> Validity {
        if value.is_empty() {
            return Validity::from_valid(!self.required);
        }
        let matches = self
            .compiled
            .as_ref()
            .map(|re| re.is_match(value))
            .unwrap_or(true);
        Validity::from_valid(matches)
    }
}

/// Feedback for the stored value, before any interaction
pub fn initial_feedback(constraint: &Constraint, value: &str) -> Option<FieldFeedback> {
    reflect(constraint.check(value), !constraint.is_empty())
}

/// Значения настроек выводятся без пробелов по краям
pub fn format_value(raw: &str) -> String {
    raw.trim().to_string()
}
