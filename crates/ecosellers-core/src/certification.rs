use chrono::NaiveDate;

use crate::form::{FieldErrors, FormValues, Rule, Schema};
use crate::notice::Notice;

/// A certificate file picked in the browser, reachable only through a
/// tab-local object URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub object_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: u64,
    pub name: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub attachment: Option<Attachment>,
}

impl Certification {
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < today)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn certification_schema() -> Schema {
    Schema::new()
        .field("name", [Rule::min_length(2, "Certification name is required")])
        .field("issuer", [Rule::min_length(2, "Issuer name is required")])
        .field(
            "issueDate",
            [
                Rule::required("Issue date is required"),
                Rule::date("Issue date must be a valid date"),
            ],
        )
        .optional("expiryDate", [Rule::date("Expiry date must be a valid date")])
        .optional("description", [])
}

fn date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn non_empty(values: &FormValues, key: &str) -> Option<String> {
    values.get(key).filter(|v| !v.is_empty()).cloned()
}

/// The seller's certifications, in insertion order.
#[derive(Debug, Clone)]
pub struct CertificationBook {
    items: Vec<Certification>,
    schema: Schema,
    last_id: u64,
}

impl Default for CertificationBook {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CertificationBook {
    pub fn new(items: Vec<Certification>) -> Self {
        let last_id = items.iter().map(|c| c.id).max().unwrap_or_default();
        Self {
            items,
            schema: certification_schema(),
            last_id,
        }
    }

    pub fn demo() -> Self {
        Self::new(crate::mock::certifications())
    }

    pub fn items(&self) -> &[Certification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Most recently issued first.
    pub fn recent(&self, count: usize) -> Vec<Certification> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        items.truncate(count);
        items
    }

    /// Validates `values` and appends the certification at the end.
    ///
    /// `now` seeds the id (milliseconds since epoch in the browser); ids stay
    /// strictly increasing even if the clock does not.
    pub fn add(
        &mut self,
        values: &FormValues,
        attachment: Option<Attachment>,
        now: u64,
    ) -> Result<(&Certification, Notice), FieldErrors> {
        let errors = self.schema.validate(values);
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut errors = FieldErrors::new();
        let Some(issue_date) = values.get("issueDate").map(String::as_str).and_then(date) else {
            errors.insert("issueDate".to_string(), "Issue date is required".to_string());
            return Err(errors);
        };

        let id = now.max(self.last_id + 1);
        self.last_id = id;

        let certification = Certification {
            id,
            name: values.get("name").cloned().unwrap_or_default(),
            issuer: values.get("issuer").cloned().unwrap_or_default(),
            issue_date,
            expiry_date: non_empty(values, "expiryDate")
                .as_deref()
                .and_then(date),
            description: non_empty(values, "description"),
            attachment,
        };
        let notice = Notice::info(
            "Certification added",
            format!("{} has been added to your certifications.", certification.name),
        );
        debug!("certification {} added", certification.id);

        self.items.push(certification);
        Ok((&self.items[self.items.len() - 1], notice))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_add_appends_one_and_keeps_order() {
        let mut book = CertificationBook::demo();
        let before: Vec<_> = book.items().iter().map(|c| c.id).collect();

        let (added, notice) = book
            .add(
                &values(&[
                    ("name", "Organic Certification"),
                    ("issuer", "Soil Association"),
                    ("issueDate", "2025-01-10"),
                ]),
                None,
                1_736_500_000_000,
            )
            .unwrap();

        assert_eq!(added.name, "Organic Certification");
        assert_eq!(added.expiry_date, None);
        assert_eq!(added.description, None);
        assert_eq!(
            notice.description,
            "Organic Certification has been added to your certifications."
        );

        assert_eq!(book.len(), before.len() + 1);
        let after: Vec<_> = book.items().iter().map(|c| c.id).collect();
        assert_eq!(&after[..before.len()], before.as_slice());
        assert_eq!(book.items().last().map(|c| c.issuer.as_str()), Some("Soil Association"));
    }

    #[test]
    fn test_add_rejects_missing_required_fields() {
        let mut book = CertificationBook::demo();
        let len = book.len();

        let errors = book
            .add(&values(&[("name", "Organic")]), None, 1)
            .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["issuer"], "Issuer name is required");
        assert_eq!(errors["issueDate"], "Issue date is required");
        assert_eq!(book.len(), len);
    }

    #[test]
    fn test_add_keeps_optional_fields_and_attachment() {
        let mut book = CertificationBook::default();
        let attachment = Attachment {
            file_name: "cert.pdf".to_string(),
            object_url: "blob:http://localhost/1234".to_string(),
        };

        let (added, _) = book
            .add(
                &values(&[
                    ("name", "Fair Trade"),
                    ("issuer", "Fairtrade International"),
                    ("issueDate", "2024-02-01"),
                    ("expiryDate", "2026-02-01"),
                    ("description", "Fair wages for producers."),
                ]),
                Some(attachment.clone()),
                5,
            )
            .unwrap();

        assert_eq!(added.expiry_date, NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(added.description.as_deref(), Some("Fair wages for producers."));
        assert_eq!(added.attachment, Some(attachment));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut book = CertificationBook::default();
        let cert = values(&[("name", "Cert"), ("issuer", "Issuer"), ("issueDate", "2024-01-01")]);

        let first = book.add(&cert, None, 100).unwrap().0.id;
        let second = book.add(&cert, None, 100).unwrap().0.id;
        let third = book.add(&cert, None, 50).unwrap().0.id;

        assert!(first < second && second < third);
    }

    #[test]
    fn test_recent_orders_by_issue_date() {
        let book = CertificationBook::demo();
        let recent = book.recent(2);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].name, "Green Business Certified");
        assert_eq!(recent[1].name, "Zero Waste Certification");
    }

    #[test]
    fn test_expiry_and_format() {
        let book = CertificationBook::demo();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let expired: Vec<_> = book
            .items()
            .iter()
            .filter(|c| c.is_expired(today))
            .map(|c| c.name.as_str())
            .collect();

        assert_eq!(expired, ["Sustainable Materials"]);
        assert_eq!(format_date(book.items()[0].issue_date), "June 15, 2024");
    }
}
