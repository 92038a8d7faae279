//! Declarative field validation.
//!
//! A [`Schema`] is an ordered list of named fields, each with an ordered list
//! of [`Rule`]s. Validation is synchronous and side-effect free; the result is
//! a map from field name to the message of the first rule it violates.
//!
//! An empty string and an absent value are the same thing: "missing".
//! Values are never trimmed unless wrapped in [`Rule::Trimmed`].

use std::collections::BTreeMap;

use chrono::NaiveDate;

pub type FormValues = BTreeMap<String, String>;
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required(String),
    MinLength(usize, String),
    Email(String),
    /// ISO-8601 calendar date, `YYYY-MM-DD`
    Date(String),
    /// Non-negative decimal number
    Number(String),
    Trimmed(Box<Rule>),
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required(message.into())
    }

    pub fn min_length(len: usize, message: impl Into<String>) -> Self {
        Rule::MinLength(len, message.into())
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email(message.into())
    }

    pub fn date(message: impl Into<String>) -> Self {
        Rule::Date(message.into())
    }

    pub fn number(message: impl Into<String>) -> Self {
        Rule::Number(message.into())
    }

    pub fn trimmed(self) -> Self {
        Rule::Trimmed(Box::new(self))
    }

    pub fn message(&self) -> &str {
        match self {
            Rule::Required(message)
            | Rule::MinLength(_, message)
            | Rule::Email(message)
            | Rule::Date(message)
            | Rule::Number(message) => message,
            Rule::Trimmed(rule) => rule.message(),
        }
    }

    pub fn check(&self, value: &str) -> bool {
        match self {
            Rule::Required(_) => !value.is_empty(),
            Rule::MinLength(len, _) => value.chars().count() >= *len,
            Rule::Email(_) => is_email(value),
            Rule::Date(_) => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            Rule::Number(_) => value
                .parse::<f64>()
                .map(|n| n.is_finite() && n >= 0.0)
                .unwrap_or(false),
            Rule::Trimmed(rule) => rule.check(value.trim()),
        }
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub optional: bool,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            optional: false,
            rules: rules.into_iter().collect(),
        });
        self
    }

    /// An optional field passes when missing; its rules only apply to a
    /// non-empty value.
    pub fn optional(mut self, name: &str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            optional: true,
            rules: rules.into_iter().collect(),
        });
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn validate_field(&self, name: &str, value: Option<&str>) -> Option<String> {
        let field = self.fields.iter().find(|f| f.name == name)?;
        let value = value.unwrap_or_default();

        if field.optional && value.is_empty() {
            return None;
        }

        field
            .rules
            .iter()
            .find(|rule| !rule.check(value))
            .map(|rule| rule.message().to_string())
    }

    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        self.fields
            .iter()
            .filter_map(|field| {
                self.validate_field(&field.name, values.get(&field.name).map(String::as_str))
                    .map(|message| (field.name.clone(), message))
            })
            .collect()
    }
}

/// Values and errors of a mounted form.
///
/// Errors are computed on submit. After the first submit attempt every
/// keystroke re-validates the edited field.
#[derive(Debug, Clone)]
pub struct FormState {
    schema: Schema,
    values: FormValues,
    errors: FieldErrors,
    submitted: bool,
}

impl FormState {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            values: FormValues::new(),
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn with_values<K, V>(schema: Schema, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut state = Self::new(schema);
        state.values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        state
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();

        if self.submitted {
            match self.schema.validate_field(field, Some(&value)) {
                Some(message) => {
                    self.errors.insert(field.to_string(), message);
                }
                None => {
                    self.errors.remove(field);
                }
            }
        }

        self.values.insert(field.to_string(), value);
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or_default()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validates every field. On success returns a snapshot of the values;
    /// on failure the errors are kept for rendering and returned.
    pub fn submit(&mut self) -> Result<FormValues, FieldErrors> {
        self.submitted = true;
        self.errors = self.schema.validate(&self.values);

        if self.errors.is_empty() {
            Ok(self.values.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
        self.submitted = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn schema() -> Schema {
        Schema::new()
            .field("name", [Rule::min_length(2, "name too short")])
            .field("email", [Rule::email("bad email")])
            .field("issued", [Rule::required("issued required"), Rule::date("bad date")])
            .optional("expiry", [Rule::date("bad expiry")])
    }

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_all_pass_yields_empty_map() {
        let errors = schema().validate(&values(&[
            ("name", "Zero Waste"),
            ("email", "seller@example.com"),
            ("issued", "2024-03-03"),
        ]));

        assert!(errors.is_empty());
    }

    #[test]
    fn test_missing_and_empty_are_identical() {
        let schema = schema();
        let absent = schema.validate(&FormValues::new());
        let empty = schema.validate(&values(&[
            ("name", ""),
            ("email", ""),
            ("issued", ""),
            ("expiry", ""),
        ]));

        assert_eq!(absent, empty);
        assert_eq!(absent.len(), 3);
        assert_eq!(absent["name"], "name too short");
        assert_eq!(absent["issued"], "issued required");
        assert!(!absent.contains_key("expiry"));
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let schema = Schema::new().field("name", [Rule::min_length(2, "short")]);
        assert!(schema.validate(&values(&[("name", "  ")])).is_empty());

        let schema = Schema::new().field("name", [Rule::min_length(2, "short").trimmed()]);
        assert_eq!(
            schema.validate(&values(&[("name", "  ")])).get("name").map(String::as_str),
            Some("short")
        );
    }

    #[test]
    fn test_optional_field_checked_when_present() {
        let errors = schema().validate(&values(&[
            ("name", "Zero Waste"),
            ("email", "seller@example.com"),
            ("issued", "2024-03-03"),
            ("expiry", "next year"),
        ]));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors["expiry"], "bad expiry");
    }

    #[test]
    fn test_first_violated_rule_wins() {
        let errors = schema().validate(&values(&[("issued", "03/03/2024")]));
        assert_eq!(errors["issued"], "bad date");
    }

    #[test]
    fn test_email_format() {
        let rule = Rule::email("bad");
        assert!(rule.check("a@b.co"));
        assert!(rule.check("first.last@mail.example.org"));
        assert!(!rule.check("a@b"));
        assert!(!rule.check("@b.co"));
        assert!(!rule.check("a@.co"));
        assert!(!rule.check("a@b.co."));
        assert!(!rule.check("a b@c.co"));
        assert!(!rule.check("a@b@c.co"));
    }

    #[test]
    fn test_number_rule() {
        let rule = Rule::number("bad");
        assert!(rule.check("10"));
        assert!(rule.check("2.5"));
        assert!(!rule.check("-1"));
        assert!(!rule.check("ten"));
        assert!(!rule.check(""));
    }

    #[test]
    fn test_form_state_submit_blocks_on_errors() {
        let mut form = FormState::new(schema());
        form.set("name", "Z");

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(form.error("name"), Some("name too short"));
    }

    #[test]
    fn test_form_state_revalidates_after_first_submit() {
        let mut form = FormState::new(schema());
        form.set("name", "Z");
        assert_eq!(form.error("name"), None);

        let _ = form.submit();
        form.set("name", "Zero Waste");
        assert_eq!(form.error("name"), None);

        form.set("email", "nope");
        assert_eq!(form.error("email"), Some("bad email"));
    }

    #[test]
    fn test_form_state_submit_returns_values() {
        let mut form = FormState::with_values(
            schema(),
            [
                ("name", "Zero Waste"),
                ("email", "seller@example.com"),
                ("issued", "2024-03-03"),
            ],
        );

        let submitted = form.submit().unwrap();
        assert_eq!(submitted["name"], "Zero Waste");
        assert!(form.errors().is_empty());

        form.reset();
        assert_eq!(form.value("name"), "");
    }
}
