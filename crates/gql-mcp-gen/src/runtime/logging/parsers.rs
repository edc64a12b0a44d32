use std::{fmt::Display, marker::PhantomData, str::FromStr};

use serde::Deserializer;

/// Deserialize a value from its string form using [`FromStr`]
pub(crate) fn from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    struct FromStrVisitor<T> {
        _phantom: PhantomData<T>,
    }

    impl<T> serde::de::Visitor<'_> for FromStrVisitor<T>
    where
        T: FromStr,
        <T as FromStr>::Err: Display,
    {
        type Value = T;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            T::from_str(v).map_err(serde::de::Error::custom)
        }
    }

    deserializer.deserialize_str(FromStrVisitor {
        _phantom: PhantomData,
    })
}
