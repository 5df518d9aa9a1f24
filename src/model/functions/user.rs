use crate::model::types::*;
use itertools::Itertools;
use leptos::logging::*;
use serde_json::Value;

/// Fetches the user list and normalizes every element into a [`User`].
///
/// Any non-2xx status is an [`Error::Http`]. A body that is JSON but not an
/// array yields an empty list.
pub async fn fetch_users(client: &reqwest::Client, endpoint: &str) -> Result<Vec<User>, Error> {
    log!("fetching users from {}", endpoint);
    let response = client.get(endpoint).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("users request to {} failed with status {}", endpoint, status);
        return Err(Error::Http(status.as_u16()));
    }

    let json: Value = response.json().await?;
    let users = normalize_users(json);
    log!("loaded {} users", users.len());
    Ok(users)
}

pub fn normalize_users(value: Value) -> Vec<User> {
    match value {
        Value::Array(items) => items.iter().map(normalize_user).collect(),
        other => {
            warn!("expected an array of users, got: {}", other);
            Vec::new()
        }
    }
}

pub fn normalize_user(value: &Value) -> User {
    let company_name = value.get("company").and_then(|company| company.get("name"));
    User {
        id: coerce_number(value.get("id")),
        name: coerce_string(value.get("name")),
        email: coerce_string(value.get("email")),
        company: Company {
            name: coerce_string(company_name),
        },
    }
}

/// String conversion with the same output a browser gives for `String(x)`.
/// `None` stands for a missing field.
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_string(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                item => coerce_string(Some(item)),
            })
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Numeric conversion matching `Number(x)`. Anything unparseable is `NaN`.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => parse_number(s),
        Some(array @ Value::Array(_)) => parse_number(&coerce_string(Some(array))),
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// `Number.prototype.toString()`: plain decimal for exponents in `-7..21`,
/// otherwise `d.ddde+x`.
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        return format!("{sign}Infinity");
    }
    if n == 0.0 {
        // covers -0
        return "0".to_string();
    }

    let sign = if n < 0.0 { "-" } else { "" };
    // shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", n.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return n.to_string();
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let k = digits.len() as i32;
    let point = exponent + 1;

    let body = if k <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat((-point) as usize))
    } else {
        let exp_sign = if point - 1 < 0 { "-" } else { "+" };
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        format!("{first}{rest}e{exp_sign}{}", (point - 1).abs())
    };
    format!("{sign}{body}")
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix_prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_prefixed {
        return parse_radix(digits, radix);
    }
    // rust also accepts "inf" and "nan", which are not numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_record_is_kept() {
        let user = normalize_user(&json!({
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz",
            "company": { "name": "Romaguera-Crona" }
        }));
        assert_eq!(
            user,
            User {
                id: 1.0,
                name: "Leanne Graham".to_string(),
                email: "Sincere@april.biz".to_string(),
                company: Company {
                    name: "Romaguera-Crona".to_string()
                },
            }
        );
    }

    #[test]
    fn malformed_company_becomes_a_string() {
        let missing = normalize_user(&json!({ "id": 2, "name": "a", "email": "b" }));
        assert_eq!(missing.company.name, "undefined");

        let not_object = normalize_user(&json!({ "company": "ACME" }));
        assert_eq!(not_object.company.name, "undefined");

        let null_name = normalize_user(&json!({ "company": { "name": null } }));
        assert_eq!(null_name.company.name, "null");

        let nested = normalize_user(&json!({ "company": { "name": { "legal": "x" } } }));
        assert_eq!(nested.company.name, "[object Object]");
    }

    #[test]
    fn fields_are_coerced() {
        let user = normalize_user(&json!({
            "id": "42",
            "name": 7,
            "email": [1, null, "x"],
            "company": { "name": true }
        }));
        assert_eq!(user.id, 42.0);
        assert_eq!(user.name, "7");
        assert_eq!(user.email, "1,,x");
        assert_eq!(user.company.name, "true");

        let user = normalize_user(&json!({ "id": "abc" }));
        assert!(user.id.is_nan());
        assert_eq!(user.name, "undefined");
    }

    #[test]
    fn number_coercion() {
        assert_eq!(coerce_number(Some(&json!(null))), 0.0);
        assert_eq!(coerce_number(Some(&json!(""))), 0.0);
        assert_eq!(coerce_number(Some(&json!(" 12.5 "))), 12.5);
        assert_eq!(coerce_number(Some(&json!("0x1A"))), 26.0);
        assert_eq!(coerce_number(Some(&json!([5]))), 5.0);
        assert!(coerce_number(Some(&json!("inf"))).is_nan());
        assert!(coerce_number(Some(&json!({}))).is_nan());
        assert!(coerce_number(None).is_nan());
    }

    #[test]
    fn number_coercion_of_prefixed_literals() {
        assert_eq!(coerce_number(Some(&json!("0b101"))), 5.0);
        assert_eq!(coerce_number(Some(&json!("0o17"))), 15.0);
        assert_eq!(coerce_number(Some(&json!("0XfF"))), 255.0);
        assert!(coerce_number(Some(&json!("0b102"))).is_nan());
        assert!(coerce_number(Some(&json!("0x"))).is_nan());
        assert!(coerce_number(Some(&json!("-0x10"))).is_nan());
    }

    #[test]
    fn string_coercion_of_numbers() {
        assert_eq!(coerce_string(Some(&json!(1.0))), "1");
        assert_eq!(coerce_string(Some(&json!(1.5))), "1.5");
        assert_eq!(coerce_string(Some(&json!(-0.0))), "0");
        assert_eq!(coerce_string(Some(&json!(123.456))), "123.456");
        assert_eq!(coerce_string(Some(&json!(-2.5))), "-2.5");
        assert_eq!(coerce_string(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(coerce_string(Some(&json!(1e21))), "1e+21");
        assert_eq!(coerce_string(Some(&json!(1.5e300))), "1.5e+300");
        assert_eq!(coerce_string(Some(&json!(0.000001))), "0.000001");
        assert_eq!(coerce_string(Some(&json!(1e-7))), "1e-7");
        assert_eq!(coerce_string(Some(&json!(-1.25e-9))), "-1.25e-9");
    }

    #[test]
    fn non_array_body_is_empty() {
        assert!(normalize_users(json!({ "users": [] })).is_empty());
        assert_eq!(normalize_users(json!([{}, {}])).len(), 2);
    }
}
