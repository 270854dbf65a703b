//! Pre-built Test Fixtures
//!
//! Provider payloads shaped the way the billing API returns them: XML with
//! `type` attributes and declarations, JSON wrapped in its root key. The same
//! fixture pair always carries the same data in both formats.

use chrono::{DateTime, TimeZone, Utc};

/// Fixture for recorded provider payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// A one-dollar setup fee with a single state tax
    pub fn line_item_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<line_item>
  <transaction_type>charge</transaction_type>
  <kind>initial</kind>
  <amount_in_cents type="integer">500</amount_in_cents>
  <memo>Setup Fee</memo>
  <discount_amount_in_cents type="integer">0</discount_amount_in_cents>
  <taxable_amount_in_cents type="integer">500</taxable_amount_in_cents>
  <taxations type="array">
    <taxation>
      <tax_id type="integer">4021</tax_id>
      <tax_name>Texas Sales Tax</tax_name>
      <rate>0.1</rate>
      <tax_amount_in_cents type="integer">50</tax_amount_in_cents>
      <tax_rules type="array">
        <tax_rule>state</tax_rule>
      </tax_rules>
    </taxation>
  </taxations>
  <component_id type="integer">1234</component_id>
</line_item>"#
    }

    /// JSON twin of [`PayloadFixtures::line_item_xml`]
    pub fn line_item_json() -> &'static str {
        r#"{
  "line_item": {
    "transaction_type": "charge",
    "kind": "initial",
    "amount_in_cents": 500,
    "memo": "Setup Fee",
    "discount_amount_in_cents": 0,
    "taxable_amount_in_cents": 500,
    "taxations": [
      {
        "tax_id": "4021",
        "tax_name": "Texas Sales Tax",
        "rate": "0.1",
        "tax_amount_in_cents": 50,
        "tax_rules": ["state"]
      }
    ],
    "component_id": 1234
  }
}"#
    }

    /// Renewal of a monthly plan with a quantity component and a carried balance
    pub fn renewal_preview_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<renewal_preview>
  <next_assessment_at type="datetime">2024-04-01T10:00:00-04:00</next_assessment_at>
  <subtotal_in_cents type="integer">6000</subtotal_in_cents>
  <total_tax_in_cents type="integer">0</total_tax_in_cents>
  <total_discount_in_cents type="integer">0</total_discount_in_cents>
  <total_in_cents type="integer">6000</total_in_cents>
  <existing_balance_in_cents type="integer">1500</existing_balance_in_cents>
  <total_amount_due_in_cents type="integer">7500</total_amount_due_in_cents>
  <uncalculated_taxes type="boolean">false</uncalculated_taxes>
  <line_items type="array">
    <line_item>
      <transaction_type>charge</transaction_type>
      <kind>baseline</kind>
      <amount_in_cents type="integer">5000</amount_in_cents>
      <memo>Gold Plan (04/01/2024 - 05/01/2024)</memo>
      <discount_amount_in_cents type="integer">0</discount_amount_in_cents>
      <taxable_amount_in_cents type="integer">0</taxable_amount_in_cents>
    </line_item>
    <line_item>
      <transaction_type>charge</transaction_type>
      <kind>quantity_based_component</kind>
      <amount_in_cents type="integer">1000</amount_in_cents>
      <memo>Seats: 10 seats</memo>
      <discount_amount_in_cents type="integer">0</discount_amount_in_cents>
      <taxable_amount_in_cents type="integer">0</taxable_amount_in_cents>
    </line_item>
  </line_items>
</renewal_preview>"#
    }

    /// JSON twin of [`PayloadFixtures::renewal_preview_xml`]
    pub fn renewal_preview_json() -> &'static str {
        r#"{
  "renewal_preview": {
    "next_assessment_at": "2024-04-01T10:00:00-04:00",
    "subtotal_in_cents": 6000,
    "total_tax_in_cents": 0,
    "total_discount_in_cents": 0,
    "total_in_cents": 6000,
    "existing_balance_in_cents": 1500,
    "total_amount_due_in_cents": 7500,
    "uncalculated_taxes": false,
    "line_items": [
      {
        "transaction_type": "charge",
        "kind": "baseline",
        "amount_in_cents": 5000,
        "memo": "Gold Plan (04/01/2024 - 05/01/2024)",
        "discount_amount_in_cents": 0,
        "taxable_amount_in_cents": 0
      },
      {
        "transaction_type": "charge",
        "kind": "quantity_based_component",
        "amount_in_cents": 1000,
        "memo": "Seats: 10 seats",
        "discount_amount_in_cents": 0,
        "taxable_amount_in_cents": 0
      }
    ]
  }
}"#
    }

    /// Signup with a trial: nothing billed now, the plan billed at the first renewal
    pub fn subscription_preview_xml() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<subscription_preview>
  <current_billing_manifest>
    <line_items type="array">
      <line_item>
        <transaction_type>charge</transaction_type>
        <kind>trial</kind>
        <amount_in_cents type="integer">0</amount_in_cents>
        <memo>Gold Plan Trial (03/01/2024 - 04/01/2024)</memo>
        <discount_amount_in_cents type="integer">0</discount_amount_in_cents>
        <taxable_amount_in_cents type="integer">0</taxable_amount_in_cents>
      </line_item>
    </line_items>
    <total_in_cents type="integer">0</total_in_cents>
    <total_discount_in_cents type="integer">0</total_discount_in_cents>
    <total_tax_in_cents type="integer">0</total_tax_in_cents>
    <subtotal_in_cents type="integer">0</subtotal_in_cents>
    <start_date type="datetime">2024-03-01T10:00:00-05:00</start_date>
    <end_date type="datetime">2024-04-01T10:00:00-04:00</end_date>
    <period_type>trial</period_type>
    <existing_balance_in_cents type="integer">0</existing_balance_in_cents>
  </current_billing_manifest>
  <next_billing_manifest>
    <line_items type="array">
      <line_item>
        <transaction_type>charge</transaction_type>
        <kind>baseline</kind>
        <amount_in_cents type="integer">5000</amount_in_cents>
        <memo>Gold Plan (04/01/2024 - 05/01/2024)</memo>
        <discount_amount_in_cents type="integer">500</discount_amount_in_cents>
        <taxable_amount_in_cents type="integer">4500</taxable_amount_in_cents>
        <taxations type="array">
          <taxation>
            <tax_id type="integer">4021</tax_id>
            <tax_name>Texas Sales Tax</tax_name>
            <rate>0.0825</rate>
            <tax_amount_in_cents type="integer">371</tax_amount_in_cents>
            <tax_rules type="array">
              <tax_rule>state</tax_rule>
              <tax_rule>city</tax_rule>
            </tax_rules>
          </taxation>
        </taxations>
      </line_item>
      <line_item>
        <transaction_type>adjustment</transaction_type>
        <kind>coupon</kind>
        <amount_in_cents type="integer">-500</amount_in_cents>
        <memo>Coupon: WELCOME10</memo>
        <discount_amount_in_cents type="integer">0</discount_amount_in_cents>
        <taxable_amount_in_cents type="integer">0</taxable_amount_in_cents>
      </line_item>
    </line_items>
    <total_in_cents type="integer">4871</total_in_cents>
    <total_discount_in_cents type="integer">500</total_discount_in_cents>
    <total_tax_in_cents type="integer">371</total_tax_in_cents>
    <subtotal_in_cents type="integer">5000</subtotal_in_cents>
    <start_date type="datetime">2024-04-01T10:00:00-04:00</start_date>
    <end_date type="datetime">2024-05-01T10:00:00-04:00</end_date>
    <period_type>recurring</period_type>
    <existing_balance_in_cents type="integer">0</existing_balance_in_cents>
  </next_billing_manifest>
</subscription_preview>"#
    }

    /// JSON twin of [`PayloadFixtures::subscription_preview_xml`]
    pub fn subscription_preview_json() -> &'static str {
        r#"{
  "subscription_preview": {
    "current_billing_manifest": {
      "line_items": [
        {
          "transaction_type": "charge",
          "kind": "trial",
          "amount_in_cents": 0,
          "memo": "Gold Plan Trial (03/01/2024 - 04/01/2024)",
          "discount_amount_in_cents": 0,
          "taxable_amount_in_cents": 0
        }
      ],
      "total_in_cents": 0,
      "total_discount_in_cents": 0,
      "total_tax_in_cents": 0,
      "subtotal_in_cents": 0,
      "start_date": "2024-03-01T10:00:00-05:00",
      "end_date": "2024-04-01T10:00:00-04:00",
      "period_type": "trial",
      "existing_balance_in_cents": 0
    },
    "next_billing_manifest": {
      "line_items": [
        {
          "transaction_type": "charge",
          "kind": "baseline",
          "amount_in_cents": 5000,
          "memo": "Gold Plan (04/01/2024 - 05/01/2024)",
          "discount_amount_in_cents": 500,
          "taxable_amount_in_cents": 4500,
          "taxations": [
            {
              "tax_id": 4021,
              "tax_name": "Texas Sales Tax",
              "rate": "0.0825",
              "tax_amount_in_cents": 371,
              "tax_rules": ["state", "city"]
            }
          ]
        },
        {
          "transaction_type": "adjustment",
          "kind": "coupon",
          "amount_in_cents": -500,
          "memo": "Coupon: WELCOME10",
          "discount_amount_in_cents": 0,
          "taxable_amount_in_cents": 0
        }
      ],
      "total_in_cents": 4871,
      "total_discount_in_cents": 500,
      "total_tax_in_cents": 371,
      "subtotal_in_cents": 5000,
      "start_date": "2024-04-01T10:00:00-04:00",
      "end_date": "2024-05-01T10:00:00-04:00",
      "period_type": "recurring",
      "existing_balance_in_cents": 0
    }
  }
}"#
    }
}

/// Fixture for the instants the recorded payloads refer to
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Signup instant (Mar 1, 2024 10:00 EST)
    pub fn signup() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap()
    }

    /// First renewal (Apr 1, 2024 10:00 EDT)
    pub fn first_renewal() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 14, 0, 0).unwrap()
    }

    /// Second renewal (May 1, 2024 10:00 EDT)
    pub fn second_renewal() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap()
    }
}
