//! Site settings models.

use serde::Serialize;
use serde_json::Value;

use super::coerce;
use super::recommendation::Cta;
use super::HydrationError;

/// A currency the site can display prices in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Currency {
    /// The ISO currency code.
    pub currency_code: String,
    /// The decimal separator character.
    pub decimal_point: String,
    /// The thousands separator character.
    pub thousands_separator: String,
    /// The currency symbol.
    pub symbol: String,
    /// Exchange rate against the site's base currency.
    pub exchange_rate: f64,
    /// Symbol placement relative to the amount.
    pub symbol_position: i64,
    /// Whether to drop trailing `.00` from rendered prices.
    pub remove_decimal_zero: bool,
    /// Whether the currency is currently offered.
    pub is_active: bool,
}

impl Currency {
    /// Hydrates a currency from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            currency_code: coerce::string(coerce::require(value, "currency_code")?),
            decimal_point: coerce::string(coerce::require(value, "decimal_point")?),
            thousands_separator: coerce::string(coerce::require(value, "thousands_separator")?),
            symbol: coerce::string(coerce::require(value, "symbol")?),
            exchange_rate: coerce::float(coerce::require(value, "exchange_rate")?),
            symbol_position: coerce::int(coerce::require(value, "symbol_position")?),
            remove_decimal_zero: coerce::boolean(coerce::require(value, "remove_decimal_zero")?),
            is_active: coerce::boolean(coerce::require(value, "is_active")?),
        })
    }
}

/// The site's subscription flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    /// Whether the plan removes provider branding from the UI.
    pub remove_branding: bool,
}

impl Subscription {
    /// Hydrates the subscription flags from one JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when `remove_branding` is absent or `null`.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        Ok(Self {
            remove_branding: coerce::boolean(coerce::require(value, "remove_branding")?),
        })
    }
}

/// The hydrated form of a `/settings` response.
///
/// Unlike the recommendation endpoints, `cta` and `subscription` are required
/// here; a settings payload without them is malformed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    /// Whether search is enabled for the site.
    pub status: bool,
    /// The site's language identifier.
    pub language_id: String,
    /// Call-to-action messages configured for the site.
    pub cta: Cta,
    /// Currencies the site can display prices in.
    pub currencies: Vec<Currency>,
    /// Subscription flags for the site's plan.
    pub subscription: Subscription,
}

impl Settings {
    /// Hydrates site settings from the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError`] when a required field is absent or `null`,
    /// or when a nested record fails to hydrate.
    pub fn from_value(value: &Value) -> Result<Self, HydrationError> {
        let currencies = coerce::optional_array(value, "currencies")
            .iter()
            .map(Currency::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            status: coerce::boolean(coerce::require(value, "status")?),
            language_id: coerce::string(coerce::require(value, "language_id")?),
            cta: Cta::from_value(coerce::require(value, "cta")?)?,
            currencies,
            subscription: Subscription::from_value(coerce::require(value, "subscription")?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings_json() -> Value {
        json!({
            "status": 1,
            "language_id": "en",
            "cta": {"typing": [{"id": 1, "message": "Search for anything"}]},
            "currencies": [{
                "currency_code": "USD",
                "decimal_point": ".",
                "thousands_separator": ",",
                "symbol": "$",
                "exchange_rate": "1.0",
                "symbol_position": 0,
                "remove_decimal_zero": false,
                "is_active": 1
            }],
            "subscription": {"remove_branding": true}
        })
    }

    #[test]
    fn test_settings_hydrate() {
        let settings = Settings::from_value(&settings_json()).unwrap();
        assert!(settings.status);
        assert_eq!(settings.language_id, "en");
        assert_eq!(settings.cta.typing.len(), 1);
        assert_eq!(settings.currencies[0].currency_code, "USD");
        assert!((settings.currencies[0].exchange_rate - 1.0).abs() < f64::EPSILON);
        assert!(settings.subscription.remove_branding);
    }

    #[test]
    fn test_missing_subscription_fails_fast() {
        let mut value = settings_json();
        value.as_object_mut().unwrap().remove("subscription");
        assert_eq!(
            Settings::from_value(&value),
            Err(HydrationError::MissingField {
                field: "subscription"
            })
        );
    }

    #[test]
    fn test_missing_currencies_defaults_to_empty() {
        let mut value = settings_json();
        value.as_object_mut().unwrap().remove("currencies");
        let settings = Settings::from_value(&value).unwrap();
        assert!(settings.currencies.is_empty());
    }
}
