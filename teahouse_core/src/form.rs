// Copyright 2026 the Teahouse Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form validation.
//!
//! Validation is a pure function from [`FormInput`] to [`FormReport`]; the
//! backend renders the report. A field missing from the page is passed as
//! `None`, is not checked, and never blocks success.

/// A validated contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// `input[name="name"]`.
    Name,
    /// `input[name="email"]`.
    Email,
    /// `textarea[name="message"]`.
    Message,
}

impl Field {
    /// All fields, in rendering order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Selector of the field's control, relative to the form.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Name => "input[name=\"name\"]",
            Self::Email => "input[name=\"email\"]",
            Self::Message => "textarea[name=\"message\"]",
        }
    }

    /// Message shown when the field is invalid.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => "请输入您的姓名",
            Self::Email => "请输入有效的邮箱地址",
            Self::Message => "请输入您的留言",
        }
    }

    /// Applies this field's rule to `value`.
    #[must_use]
    pub fn check(self, value: &str) -> FieldOutcome {
        let ok = match self {
            Self::Name | Self::Message => !value.trim().is_empty(),
            Self::Email => is_valid_email(value),
        };
        if ok {
            FieldOutcome::Valid
        } else {
            FieldOutcome::Invalid(self.error_message())
        }
    }
}

/// Result of checking one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOutcome {
    /// Passed; any previous error is cleared.
    Valid,
    /// Failed with this message.
    Invalid(&'static str),
}

impl FieldOutcome {
    /// Returns `true` for [`FieldOutcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Current field values; `None` for fields absent from the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormInput<'a> {
    /// Name value.
    pub name: Option<&'a str>,
    /// Email value.
    pub email: Option<&'a str>,
    /// Message value.
    pub message: Option<&'a str>,
}

impl<'a> FormInput<'a> {
    /// Value of `field`, if the field exists.
    #[must_use]
    pub const fn get(&self, field: Field) -> Option<&'a str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }
}

/// Outcome of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormReport {
    outcomes: [(Field, Option<FieldOutcome>); 3],
}

impl FormReport {
    /// Per-field outcomes; `None` for fields that were not present.
    #[must_use]
    pub const fn outcomes(&self) -> &[(Field, Option<FieldOutcome>); 3] {
        &self.outcomes
    }

    /// Outcome for `field`.
    #[must_use]
    pub fn outcome(&self, field: Field) -> Option<FieldOutcome> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, o)| *o)
    }

    /// Returns `true` if every present field passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes
            .iter()
            .all(|(_, o)| o.is_none_or(|o| o.is_valid()))
    }
}

/// Validates every present field.
#[must_use]
pub fn validate_form(input: &FormInput<'_>) -> FormReport {
    FormReport {
        outcomes: Field::ALL.map(|field| (field, input.get(field).map(|v| field.check(v)))),
    }
}

/// ASCII email shape check: `local@domain.tld`.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace, exactly one
/// `@` with a non-empty local part, and a domain holding a `.` with at least
/// one character on each side. Not an RFC 5322 parser.
///
/// "Whitespace" is the set `\s` matches in a browser, which differs from
/// [`char::is_whitespace`] on U+0085 and U+FEFF.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_pattern_space) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Any dot that is neither the first nor the last character of the domain.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Characters matched by `\s` in a browser regex.
const fn is_pattern_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.c"), "minimal shape passes");
        assert!(is_valid_email("tea.lover@mail.example.cn"));
        assert!(is_valid_email("a@b.c.d"), "several dots");
        assert!(!is_valid_email("a@b"), "no dot in domain");
        assert!(!is_valid_email("ab.c"), "no @");
        assert!(!is_valid_email(""), "empty");
        assert!(!is_valid_email(" "), "whitespace");
    }

    #[test]
    fn email_edge_cases() {
        assert!(!is_valid_email("@b.c"), "empty local part");
        assert!(!is_valid_email("a@.c"), "dot right after @");
        assert!(!is_valid_email("a@b."), "trailing dot");
        assert!(!is_valid_email("a@b@c.d"), "two @");
        assert!(!is_valid_email("a @b.c"), "inner space");
        assert!(!is_valid_email("a@b.c\n"), "trailing newline");
        assert!(is_valid_email("a@..c"), "middle dot is enough");
    }

    #[test]
    fn email_whitespace_follows_browser_pattern() {
        assert!(is_valid_email("a\u{85}@b.c"), "NEL is not pattern whitespace");
        assert!(!is_valid_email("a\u{FEFF}@b.c"), "BOM is pattern whitespace");
        assert!(!is_valid_email("a@b\u{3000}.c"), "ideographic space");
        assert!(!is_valid_email("a\u{2007}@b.c"), "figure space");
        assert!(!is_valid_email("a@b.c\u{0B}"), "vertical tab");
    }

    #[test]
    fn blank_name_and_message_fail() {
        assert_eq!(
            Field::Name.check("   "),
            FieldOutcome::Invalid("请输入您的姓名")
        );
        assert_eq!(
            Field::Message.check(""),
            FieldOutcome::Invalid("请输入您的留言")
        );
        assert_eq!(Field::Name.check(" 陆羽 "), FieldOutcome::Valid);
    }

    #[test]
    fn valid_form_succeeds() {
        let report = validate_form(&FormInput {
            name: Some("陆羽"),
            email: Some("luyu@chajing.cn"),
            message: Some("请问龙井的冲泡温度？"),
        });
        assert!(report.is_success(), "all fields valid");
        for (_, outcome) in report.outcomes() {
            assert_eq!(*outcome, Some(FieldOutcome::Valid));
        }
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let report = validate_form(&FormInput {
            name: Some(""),
            email: Some("nope"),
            message: Some("hi"),
        });
        assert!(!report.is_success(), "two fields failed");
        assert_eq!(
            report.outcome(Field::Name),
            Some(FieldOutcome::Invalid("请输入您的姓名"))
        );
        assert_eq!(
            report.outcome(Field::Email),
            Some(FieldOutcome::Invalid("请输入有效的邮箱地址"))
        );
        assert_eq!(report.outcome(Field::Message), Some(FieldOutcome::Valid));
    }

    #[test]
    fn absent_fields_are_skipped() {
        let report = validate_form(&FormInput {
            name: None,
            email: Some("a@b.c"),
            message: None,
        });
        assert!(report.is_success(), "missing fields never block success");
        assert_eq!(report.outcome(Field::Name), None);
        assert_eq!(report.outcome(Field::Email), Some(FieldOutcome::Valid));

        let empty = validate_form(&FormInput::default());
        assert!(empty.is_success(), "a form with no checked fields succeeds");
    }
}
