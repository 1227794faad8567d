//! Compile-time checked store identities.
//!
//! Keyed backends (memory, sled) refuse free-form string identities: callers
//! enumerate every identity used with a backend in one closed enum, so a
//! duplicated or mistyped identity is a build error rather than a runtime
//! surprise. Deriving `strum::AsRefStr` and `strum::EnumIter` on the enum is
//! all it takes.

use std::fmt::Debug;
use std::hash::Hash;

use strum::IntoEnumIterator;

/// Bound bundle for closed identity enums.
///
/// The `IntoEnumIterator` requirement is what shuts out ad hoc `&str` keys:
/// only a finite, enumerable set of identities qualifies.
///
/// # Examples
///
/// ```
/// use strum::{AsRefStr, EnumIter};
/// use valet_store::traits::key::StoreKey;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
/// enum SettingsKey {
///     Theme,
///     Locale,
/// }
///
/// fn takes_key<K: StoreKey>(key: K) -> String {
///     key.as_ref().to_owned()
/// }
///
/// assert_eq!(takes_key(SettingsKey::Theme), "Theme");
/// ```
pub trait StoreKey:
    AsRef<str> + Copy + Eq + Hash + Debug + IntoEnumIterator + Send + Sync + 'static
{
}

impl<K> StoreKey for K where
    K: AsRef<str> + Copy + Eq + Hash + Debug + IntoEnumIterator + Send + Sync + 'static
{
}
