//! Payload Builders
//!
//! Builders for provider payloads with sensible defaults. Each builder
//! renders the same logical payload as a bare JSON object, a wrapped JSON
//! document and an XML document, so decoders can be checked for parity.

use quick_xml::escape::escape;
use serde_json::{Map, Value};

/// A provider payload that can be rendered in both wire formats
pub trait Payload {
    /// Root element / wrapper key
    const ROOT: &'static str;

    /// Renders the bare JSON object
    fn to_json(&self) -> Value;

    /// Renders `{"<ROOT>": {...}}`
    fn json_document(&self) -> String {
        let mut document = Map::new();
        document.insert(Self::ROOT.to_string(), self.to_json());
        Value::Object(document).to_string()
    }

    /// Renders `<ROOT>...</ROOT>`
    fn xml_document(&self) -> String {
        json_to_xml(Self::ROOT, &self.to_json())
    }
}

/// Element name the provider uses for one entry of a list field
pub fn item_tag(container: &str) -> &str {
    match container {
        "line_items" => "line_item",
        "taxations" => "taxation",
        "tax_rules" => "tax_rule",
        other => other.strip_suffix('s').unwrap_or(other),
    }
}

/// Renders a JSON value as a provider-style XML element
///
/// Arrays repeat [`item_tag`] elements inside a `type="array"` container and
/// nulls become `nil="true"` elements.
pub fn json_to_xml(name: &str, value: &Value) -> String {
    let mut out = String::new();
    write_element(&mut out, name, value);
    out
}

fn write_element(out: &mut String, name: &str, value: &Value) {
    match value {
        Value::Null => out.push_str(&format!("<{} nil=\"true\"/>", name)),
        Value::Object(map) => {
            out.push_str(&format!("<{}>", name));
            for (key, child) in map {
                write_element(out, key, child);
            }
            out.push_str(&format!("</{}>", name));
        }
        Value::Array(items) => {
            out.push_str(&format!("<{} type=\"array\">", name));
            for item in items {
                write_element(out, item_tag(name), item);
            }
            out.push_str(&format!("</{}>", name));
        }
        Value::String(text) => out.push_str(&format!("<{0}>{1}</{0}>", name, escape(text.as_str()))),
        scalar => out.push_str(&format!("<{0}>{1}</{0}>", name, scalar)),
    }
}

fn insert_optional(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

/// Builder for `taxation` payloads
#[derive(Debug, Clone)]
pub struct TaxationPayload {
    pub rate: Option<String>,
    pub tax_amount_in_cents: i64,
    pub tax_id: Option<String>,
    pub tax_name: Option<String>,
    pub tax_rules: Option<Vec<String>>,
}

impl Default for TaxationPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl TaxationPayload {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            rate: Some("0.0825".to_string()),
            tax_amount_in_cents: 50,
            tax_id: Some("4021".to_string()),
            tax_name: Some("Texas Sales Tax".to_string()),
            tax_rules: Some(vec!["state".to_string()]),
        }
    }

    /// Sets the tax amount
    pub fn with_tax_amount_in_cents(mut self, cents: i64) -> Self {
        self.tax_amount_in_cents = cents;
        self
    }

    /// Sets the tax name
    pub fn with_tax_name(mut self, name: impl Into<String>) -> Self {
        self.tax_name = Some(name.into());
        self
    }

    /// Sets the tax rules
    pub fn with_tax_rules(mut self, rules: Vec<String>) -> Self {
        self.tax_rules = Some(rules);
        self
    }
}

impl Payload for TaxationPayload {
    const ROOT: &'static str = "taxation";

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        insert_optional(&mut map, "rate", self.rate.clone().map(Value::from));
        map.insert("tax_amount_in_cents".into(), self.tax_amount_in_cents.into());
        insert_optional(&mut map, "tax_id", self.tax_id.clone().map(Value::from));
        insert_optional(&mut map, "tax_name", self.tax_name.clone().map(Value::from));
        insert_optional(&mut map, "tax_rules", self.tax_rules.clone().map(Value::from));
        Value::Object(map)
    }
}

/// Builder for `line_item` payloads
#[derive(Debug, Clone)]
pub struct LineItemPayload {
    pub amount_in_cents: i64,
    pub discount_amount_in_cents: i64,
    pub kind: String,
    pub memo: Option<String>,
    pub taxable_amount_in_cents: i64,
    pub transaction_type: String,
    pub taxations: Option<Vec<TaxationPayload>>,
}

impl Default for LineItemPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemPayload {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            amount_in_cents: 500,
            discount_amount_in_cents: 0,
            kind: "initial".to_string(),
            memo: Some("Basic Plan (03/01/2024 - 04/01/2024)".to_string()),
            taxable_amount_in_cents: 500,
            transaction_type: "charge".to_string(),
            taxations: Some(vec![TaxationPayload::new()]),
        }
    }

    /// Sets the amount
    pub fn with_amount_in_cents(mut self, cents: i64) -> Self {
        self.amount_in_cents = cents;
        self
    }

    /// Sets the discount amount
    pub fn with_discount_amount_in_cents(mut self, cents: i64) -> Self {
        self.discount_amount_in_cents = cents;
        self
    }

    /// Sets the charge kind wire code
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Sets the memo
    pub fn with_memo(mut self, memo: Option<String>) -> Self {
        self.memo = memo;
        self
    }

    /// Sets the transaction type wire code
    pub fn with_transaction_type(mut self, transaction_type: impl Into<String>) -> Self {
        self.transaction_type = transaction_type.into();
        self
    }

    /// Sets the taxations
    pub fn with_taxations(mut self, taxations: Option<Vec<TaxationPayload>>) -> Self {
        self.taxations = taxations;
        self
    }
}

impl Payload for LineItemPayload {
    const ROOT: &'static str = "line_item";

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("transaction_type".into(), self.transaction_type.clone().into());
        map.insert("kind".into(), self.kind.clone().into());
        map.insert("amount_in_cents".into(), self.amount_in_cents.into());
        insert_optional(&mut map, "memo", self.memo.clone().map(Value::from));
        map.insert("discount_amount_in_cents".into(), self.discount_amount_in_cents.into());
        map.insert("taxable_amount_in_cents".into(), self.taxable_amount_in_cents.into());
        insert_optional(
            &mut map,
            "taxations",
            self.taxations
                .as_ref()
                .map(|taxations| Value::Array(taxations.iter().map(Payload::to_json).collect())),
        );
        Value::Object(map)
    }
}

/// Builder for `billing_manifest` payloads
#[derive(Debug, Clone)]
pub struct BillingManifestPayload {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub period_type: String,
    pub existing_balance_in_cents: i64,
    pub subtotal_in_cents: i64,
    pub total_discount_in_cents: i64,
    pub total_tax_in_cents: i64,
    pub total_in_cents: i64,
    pub line_items: Option<Vec<LineItemPayload>>,
}

impl Default for BillingManifestPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl BillingManifestPayload {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            start_date: Some("2024-03-01T10:00:00-05:00".to_string()),
            end_date: Some("2024-04-01T10:00:00-04:00".to_string()),
            period_type: "recurring".to_string(),
            existing_balance_in_cents: 0,
            subtotal_in_cents: 1000,
            total_discount_in_cents: 0,
            total_tax_in_cents: 100,
            total_in_cents: 1100,
            line_items: Some(vec![LineItemPayload::new(), LineItemPayload::new()]),
        }
    }

    /// Sets the total
    pub fn with_total_in_cents(mut self, cents: i64) -> Self {
        self.total_in_cents = cents;
        self
    }

    /// Sets the period type wire code
    pub fn with_period_type(mut self, period_type: impl Into<String>) -> Self {
        self.period_type = period_type.into();
        self
    }

    /// Sets the period dates
    pub fn with_dates(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Sets the line items
    pub fn with_line_items(mut self, line_items: Option<Vec<LineItemPayload>>) -> Self {
        self.line_items = line_items;
        self
    }
}

impl Payload for BillingManifestPayload {
    const ROOT: &'static str = "billing_manifest";

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        insert_optional(&mut map, "start_date", self.start_date.clone().map(Value::from));
        insert_optional(&mut map, "end_date", self.end_date.clone().map(Value::from));
        map.insert("period_type".into(), self.period_type.clone().into());
        map.insert("existing_balance_in_cents".into(), self.existing_balance_in_cents.into());
        map.insert("subtotal_in_cents".into(), self.subtotal_in_cents.into());
        map.insert("total_discount_in_cents".into(), self.total_discount_in_cents.into());
        map.insert("total_tax_in_cents".into(), self.total_tax_in_cents.into());
        map.insert("total_in_cents".into(), self.total_in_cents.into());
        insert_optional(
            &mut map,
            "line_items",
            self.line_items
                .as_ref()
                .map(|items| Value::Array(items.iter().map(Payload::to_json).collect())),
        );
        Value::Object(map)
    }
}

/// Builder for `renewal_preview` payloads
#[derive(Debug, Clone)]
pub struct RenewalPreviewPayload {
    pub next_assessment_at: Option<String>,
    pub existing_balance_in_cents: i64,
    pub subtotal_in_cents: i64,
    pub total_discount_in_cents: i64,
    pub total_tax_in_cents: i64,
    pub total_in_cents: i64,
    pub total_amount_due_in_cents: i64,
    pub uncalculated_taxes: bool,
    pub line_items: Option<Vec<LineItemPayload>>,
}

impl Default for RenewalPreviewPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl RenewalPreviewPayload {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            next_assessment_at: Some("2024-04-01T10:00:00-04:00".to_string()),
            existing_balance_in_cents: 250,
            subtotal_in_cents: 1000,
            total_discount_in_cents: 0,
            total_tax_in_cents: 100,
            total_in_cents: 1100,
            total_amount_due_in_cents: 1350,
            uncalculated_taxes: false,
            line_items: Some(vec![LineItemPayload::new()]),
        }
    }

    /// Sets the total
    pub fn with_total_in_cents(mut self, cents: i64) -> Self {
        self.total_in_cents = cents;
        self
    }

    /// Sets the uncalculated taxes flag
    pub fn with_uncalculated_taxes(mut self, flag: bool) -> Self {
        self.uncalculated_taxes = flag;
        self
    }

    /// Sets the line items
    pub fn with_line_items(mut self, line_items: Option<Vec<LineItemPayload>>) -> Self {
        self.line_items = line_items;
        self
    }
}

impl Payload for RenewalPreviewPayload {
    const ROOT: &'static str = "renewal_preview";

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        insert_optional(&mut map, "next_assessment_at", self.next_assessment_at.clone().map(Value::from));
        map.insert("existing_balance_in_cents".into(), self.existing_balance_in_cents.into());
        map.insert("subtotal_in_cents".into(), self.subtotal_in_cents.into());
        map.insert("total_discount_in_cents".into(), self.total_discount_in_cents.into());
        map.insert("total_tax_in_cents".into(), self.total_tax_in_cents.into());
        map.insert("total_in_cents".into(), self.total_in_cents.into());
        map.insert("total_amount_due_in_cents".into(), self.total_amount_due_in_cents.into());
        map.insert("uncalculated_taxes".into(), self.uncalculated_taxes.into());
        insert_optional(
            &mut map,
            "line_items",
            self.line_items
                .as_ref()
                .map(|items| Value::Array(items.iter().map(Payload::to_json).collect())),
        );
        Value::Object(map)
    }
}

/// Builder for `subscription_preview` payloads
#[derive(Debug, Clone)]
pub struct SubscriptionPreviewPayload {
    pub current_billing_manifest: Option<BillingManifestPayload>,
    pub next_billing_manifest: Option<BillingManifestPayload>,
}

impl Default for SubscriptionPreviewPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionPreviewPayload {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            current_billing_manifest: Some(BillingManifestPayload::new()),
            next_billing_manifest: Some(
                BillingManifestPayload::new()
                    .with_total_in_cents(1000)
                    .with_dates(
                        Some("2024-04-01T10:00:00-04:00".to_string()),
                        Some("2024-05-01T10:00:00-04:00".to_string()),
                    ),
            ),
        }
    }

    /// Sets the current manifest
    pub fn with_current(mut self, manifest: Option<BillingManifestPayload>) -> Self {
        self.current_billing_manifest = manifest;
        self
    }

    /// Sets the next manifest
    pub fn with_next(mut self, manifest: Option<BillingManifestPayload>) -> Self {
        self.next_billing_manifest = manifest;
        self
    }
}

impl Payload for SubscriptionPreviewPayload {
    const ROOT: &'static str = "subscription_preview";

    fn to_json(&self) -> Value {
        let mut map = Map::new();
        insert_optional(
            &mut map,
            "current_billing_manifest",
            self.current_billing_manifest.as_ref().map(Payload::to_json),
        );
        insert_optional(
            &mut map,
            "next_billing_manifest",
            self.next_billing_manifest.as_ref().map(Payload::to_json),
        );
        Value::Object(map)
    }
}
