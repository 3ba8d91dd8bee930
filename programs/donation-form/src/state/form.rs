use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{config::PRESET_AMOUNTS, error::FormError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "momo")]
    MobileMoney,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "transfer")]
    BankTransfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::MobileMoney,
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
    ];

    /// Identifier the backend stores.
    pub fn id(self) -> &'static str {
        match self {
            PaymentMethod::MobileMoney => "momo",
            PaymentMethod::Card => "card",
            PaymentMethod::BankTransfer => "transfer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PaymentMethod::MobileMoney => "Mobile Money",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            PaymentMethod::MobileMoney => "MTN, Vodafone, AirtelTigo",
            PaymentMethod::Card => "Visa, Mastercard",
            PaymentMethod::BankTransfer => "Direct deposit",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PaymentMethod {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.id() == s)
            .ok_or_else(|| FormError::UnknownPaymentMethod(s.to_string()))
    }
}

/// One of the quick-select amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PresetAmount(u32);

impl PresetAmount {
    pub fn all() -> impl Iterator<Item = PresetAmount> {
        PRESET_AMOUNTS.into_iter().map(PresetAmount)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Text written into the amount field.
    pub fn canonical(self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<u32> for PresetAmount {
    type Error = FormError;

    fn try_from(amount: u32) -> Result<Self, Self::Error> {
        if PRESET_AMOUNTS.contains(&amount) {
            Ok(PresetAmount(amount))
        } else {
            Err(FormError::UnknownPreset(amount))
        }
    }
}

/// Text inputs of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
    Amount,
}

impl FormField {
    pub const REQUIRED: [FormField; 4] = [
        FormField::Amount,
        FormField::Name,
        FormField::Email,
        FormField::Phone,
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DonationFormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Whatever the donor typed or the last preset picked.
    pub amount: String,
    pub payment_method: PaymentMethod,
}

impl DonationFormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
            FormField::Amount => &self.amount,
        }
    }

    pub fn with_field(mut self, field: FormField, value: String) -> Self {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Message => self.message = value,
            FormField::Amount => self.amount = value,
        }
        self
    }

    /// Required inputs that would fail the page's input constraints.
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| !self.is_valid(*field))
            .collect()
    }

    fn is_valid(&self, field: FormField) -> bool {
        let value = self.field(field).trim();
        if value.is_empty() {
            return false;
        }
        match field {
            FormField::Amount => is_number_input(value),
            FormField::Email => value
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty()),
            _ => true,
        }
    }

    pub fn to_request(&self) -> DonationRequest {
        DonationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            amount: self.amount.trim().to_string(),
            message: self.message.clone(),
            payment_method: self.payment_method,
        }
    }
}

/// Accepts what an `<input type="number">` accepts: `-`, digits, an optional
/// fraction with at least one digit, an optional exponent. No leading `+`.
fn is_number_input(value: &str) -> bool {
    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let mantissa_ok = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole.is_empty() || digits(whole)) && digits(fraction),
        None => digits(mantissa),
    };
    let exponent_ok = exponent.map_or(true, |exp| {
        digits(exp.strip_prefix(['+', '-']).unwrap_or(exp))
    });
    mantissa_ok && exponent_ok
}

/// Body of `POST /donate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub amount: String,
    pub message: String,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
}
