//! Typed views over raw parameters.
//!
//! A [`Field`] pairs a [`ParamKey`] with a [`FieldConfig`]. Reading falls back to
//! the default whenever the raw value is absent or does not decode. Writing the
//! default removes the key so the hash stays minimal.

use super::params::{ParamKey, ParamStore};

/// Conversion between a cooked value and its raw string form.
///
/// Used directly by [`FieldConfig::DefaultOnly`] fields, and as the encoder of
/// last resort for [`FieldConfig::Codec`] fields without one.
pub trait RawParam: Sized {
    /// Decode a raw value. `None` means "use the default".
    fn from_raw(raw: &str) -> Option<Self>;
    /// String form written to the store.
    fn to_raw(&self) -> String;
}

impl RawParam for String {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }

    fn to_raw(&self) -> String {
        self.clone()
    }
}

impl RawParam for Option<String> {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(Some(raw.to_owned()))
    }

    fn to_raw(&self) -> String {
        self.clone().unwrap_or_default()
    }
}

impl RawParam for f64 {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(decode_number(raw))
    }

    fn to_raw(&self) -> String {
        self.to_string()
    }
}

impl RawParam for bool {
    fn from_raw(raw: &str) -> Option<Self> {
        Some(decode_bool(raw))
    }

    fn to_raw(&self) -> String {
        encode_bool(self)
    }
}

/// How a field resolves its cooked value.
#[derive(Clone, Debug)]
pub enum FieldConfig<T> {
    /// Plain default; the raw string is used through [`RawParam`].
    DefaultOnly(T),
    /// Default plus explicit codec.
    Codec {
        /// Value reported when the key is absent or fails to decode.
        default: T,
        /// Raw string to cooked value.
        decode: fn(&str) -> Option<T>,
        /// Cooked value to raw string. Falls back to [`RawParam::to_raw`].
        encode: Option<fn(&T) -> String>,
    },
}

/// A typed, defaulted parameter.
#[derive(Clone, Debug)]
pub struct Field<T> {
    key: ParamKey,
    config: FieldConfig<T>,
}

impl<T> Field<T>
where
    T: RawParam + Clone + PartialEq,
{
    /// Build a field from an explicit config.
    #[must_use]
    pub const fn new(key: ParamKey, config: FieldConfig<T>) -> Self {
        Self { key, config }
    }

    /// Field with a plain default.
    #[must_use]
    pub const fn with_default(key: ParamKey, default: T) -> Self {
        Self::new(key, FieldConfig::DefaultOnly(default))
    }

    /// Field with a default and a custom codec.
    #[must_use]
    pub const fn with_codec(
        key: ParamKey,
        default: T,
        decode: fn(&str) -> Option<T>,
        encode: Option<fn(&T) -> String>,
    ) -> Self {
        Self::new(
            key,
            FieldConfig::Codec {
                default,
                decode,
                encode,
            },
        )
    }

    /// Underlying key.
    #[must_use]
    pub const fn key(&self) -> ParamKey {
        self.key
    }

    /// Default value.
    #[must_use]
    pub const fn default_value(&self) -> &T {
        match &self.config {
            FieldConfig::DefaultOnly(default) | FieldConfig::Codec { default, .. } => default,
        }
    }

    /// Decode a raw value without consulting the default.
    #[must_use]
    pub fn decode(&self, raw: &str) -> Option<T> {
        match &self.config {
            FieldConfig::DefaultOnly(_) => T::from_raw(raw),
            FieldConfig::Codec { decode, .. } => decode(raw),
        }
    }

    /// Encode a cooked value to its raw form.
    #[must_use]
    pub fn encode(&self, value: &T) -> String {
        match &self.config {
            FieldConfig::Codec {
                encode: Some(encode),
                ..
            } => encode(value),
            _ => value.to_raw(),
        }
    }

    /// Read the cooked value from `store`.
    #[must_use]
    pub fn get(&self, store: &ParamStore) -> T {
        store
            .get(self.key)
            .and_then(|raw| self.decode(raw))
            .unwrap_or_else(|| self.default_value().clone())
    }

    /// Write `value` into `store`; the default removes the key.
    pub fn set(&self, store: &mut ParamStore, value: T) {
        if &value == self.default_value() {
            store.remove(self.key);
        } else {
            store.set(self.key, self.encode(&value));
        }
    }
}

/// Lenient number decoding: anything that does not parse becomes `0`.
#[must_use]
pub fn decode_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Strict boolean decoding: only `"true"` is true.
#[must_use]
pub fn decode_bool(raw: &str) -> bool {
    raw == "true"
}

/// Boolean encoding used by the visibility flags.
// Signature fixed by the `fn(&T) -> String` encoder slot
#[allow(clippy::trivially_copy_pass_by_ref)]
#[must_use]
pub fn encode_bool(value: &bool) -> String {
    if *value { "true" } else { "false" }.to_string()
}
