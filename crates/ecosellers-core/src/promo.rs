use std::fmt;

use rand::Rng;

use crate::error::PromoError;
use crate::form::{FormValues, Rule, Schema};
use crate::notice::Notice;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
    FreeShipping,
}

impl DiscountType {
    pub const ALL: [DiscountType; 3] = [
        DiscountType::Percentage,
        DiscountType::Fixed,
        DiscountType::FreeShipping,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
            DiscountType::FreeShipping => "free-shipping",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage (%)",
            DiscountType::Fixed => "Fixed Amount ($)",
            DiscountType::FreeShipping => "Free Shipping",
        }
    }

    pub fn needs_value(&self) -> bool {
        !matches!(self, DiscountType::FreeShipping)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoCode {
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.discount_type {
            DiscountType::Percentage => write!(f, "{}% Off", self.discount_value),
            DiscountType::Fixed => write!(f, "${} Off", self.discount_value),
            DiscountType::FreeShipping => write!(f, "Free Shipping"),
        }
    }
}

pub fn generate_code<R: Rng>(rng: &mut R, prefix: &str, suffix_len: usize) -> String {
    let mut code = String::with_capacity(prefix.len() + suffix_len);
    code.push_str(prefix);
    for _ in 0..suffix_len {
        code.push(char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]));
    }
    code
}

/// A code is always required; the discount value only when the type
/// carries one.
pub fn promo_schema(discount_type: DiscountType) -> Schema {
    let schema = Schema::new().field("code", [Rule::required("Promo code is required").trimmed()]);
    if discount_type.needs_value() {
        schema.field(
            "discountValue",
            [
                Rule::required("Discount value is required"),
                Rule::number("Discount value must be a positive number"),
            ],
        )
    } else {
        schema
    }
}

/// Draft of the promo form plus the codes published from it this session.
#[derive(Debug, Clone)]
pub struct PromoBook {
    prefix: String,
    suffix_len: usize,
    pub code: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    published: Vec<PromoCode>,
}

impl Default for PromoBook {
    fn default() -> Self {
        Self::new("ECO", 5)
    }
}

impl PromoBook {
    pub fn new(prefix: impl Into<String>, suffix_len: usize) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_len,
            code: String::new(),
            discount_type: DiscountType::default(),
            discount_value: "10".to_string(),
            published: Vec::new(),
        }
    }

    pub fn published(&self) -> &[PromoCode] {
        &self.published
    }

    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> &str {
        self.code = generate_code(rng, &self.prefix, self.suffix_len);
        &self.code
    }

    pub fn reset_draft(&mut self) {
        self.code.clear();
        self.discount_type = DiscountType::default();
        self.discount_value = "10".to_string();
    }

    /// Appends the drafted code to the published list and resets the draft.
    pub fn publish(&mut self) -> Result<Notice, PromoError> {
        let values = FormValues::from([
            ("code".to_string(), self.code.clone()),
            ("discountValue".to_string(), self.discount_value.clone()),
        ]);
        let errors = promo_schema(self.discount_type).validate(&values);
        if !errors.is_empty() {
            debug!("promo draft rejected: {:?}", errors);
            return Err(PromoError::MissingInformation);
        }

        let promo = PromoCode {
            code: self.code.clone(),
            discount_type: self.discount_type,
            discount_value: self.discount_value.clone(),
        };
        let notice = Notice::info(
            "Promo code published!",
            format!("{} has been published to the promo codes website.", promo.code),
        );

        info!("published promo code {} ({promo})", promo.code);
        self.published.push(promo);
        self.reset_draft();

        Ok(notice)
    }
}

impl From<PromoError> for Notice {
    fn from(e: PromoError) -> Self {
        match e {
            PromoError::MissingInformation => Notice::error("Missing information", e.to_string()),
        }
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn test_generated_codes_have_prefix_and_fixed_length() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = generate_code(&mut rng, "ECO", 5);
            assert!(code.starts_with("ECO"));
            assert_eq!(code.len(), 8);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_publish_appends_exactly_one() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut book = PromoBook::default();

        let code = book.generate(&mut rng).to_string();
        book.discount_type = DiscountType::Fixed;
        book.discount_value = "5".to_string();
        let notice = book.publish().unwrap();

        assert_eq!(book.published().len(), 1);
        assert_eq!(book.published()[0].code, code);
        assert_eq!(book.published()[0].to_string(), "$5 Off");
        assert_eq!(notice.title, "Promo code published!");

        assert_eq!(book.code, "");
        assert_eq!(book.discount_type, DiscountType::Percentage);
        assert_eq!(book.discount_value, "10");

        book.generate(&mut rng);
        book.publish().unwrap();
        assert_eq!(book.published().len(), 2);
        assert_eq!(book.published()[0].code, code);
    }

    #[test]
    fn test_publish_without_code_is_rejected() {
        let mut book = PromoBook::default();

        assert_eq!(book.publish(), Err(PromoError::MissingInformation));
        assert!(book.published().is_empty());

        let notice = Notice::from(PromoError::MissingInformation);
        assert!(notice.is_destructive());
        assert_eq!(notice.title, "Missing information");
    }

    #[test]
    fn test_free_shipping_needs_no_value() {
        let mut book = PromoBook::default();
        book.code = "ECOSPRING".to_string();
        book.discount_value.clear();

        assert_eq!(book.publish(), Err(PromoError::MissingInformation));

        book.discount_type = DiscountType::FreeShipping;
        book.publish().unwrap();
        assert_eq!(book.published()[0].to_string(), "Free Shipping");
    }

    #[test]
    fn test_discount_value_must_be_a_number() {
        let mut book = PromoBook::default();

        for value in ["abc", "-5", "NaN", " "] {
            book.code = "ECOABCDE".to_string();
            book.discount_value = value.to_string();
            assert_eq!(book.publish(), Err(PromoError::MissingInformation), "{value:?}");
        }
        assert!(book.published().is_empty());
        assert_eq!(book.code, "ECOABCDE");

        book.discount_value = "12.5".to_string();
        book.publish().unwrap();
        assert_eq!(book.published()[0].to_string(), "12.5% Off");
    }

    #[test]
    fn test_promo_schema_skips_value_for_free_shipping() {
        let values = FormValues::from([("code".to_string(), "ECOSPRING".to_string())]);

        assert!(promo_schema(DiscountType::FreeShipping).validate(&values).is_empty());
        assert_eq!(
            promo_schema(DiscountType::Percentage).validate(&values)["discountValue"],
            "Discount value is required"
        );
        assert!(promo_schema(DiscountType::Fixed)
            .validate(&FormValues::new())
            .contains_key("code"));
    }

    #[test]
    fn test_discount_type_values() {
        for t in DiscountType::ALL {
            assert_eq!(DiscountType::from_value(t.value()), Some(t));
        }
        assert_eq!(DiscountType::from_value("bogus"), None);
    }
}
