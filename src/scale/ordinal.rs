use crate::foundation::core::Rgb8;

/// Categorical color scale with a fixed domain.
///
/// Keys are assigned palette entries in the order they were first seen when the scale was
/// built; the palette wraps around when there are more keys than colors.
#[derive(Clone, Debug, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    palette: Vec<Rgb8>,
    fallback: Rgb8,
}

impl OrdinalScale {
    /// Build from keys in encounter order. Repeated keys keep their first slot.
    pub fn from_keys<'a>(
        keys: impl IntoIterator<Item = &'a str>,
        palette: Vec<Rgb8>,
        fallback: Rgb8,
    ) -> Self {
        let mut domain: Vec<String> = Vec::new();
        for key in keys {
            if !domain.iter().any(|k| k == key) {
                domain.push(key.to_owned());
            }
        }
        Self {
            domain,
            palette,
            fallback,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Color for `key`; keys outside the domain get the fallback color.
    pub fn get(&self, key: &str) -> Rgb8 {
        if self.palette.is_empty() {
            return self.fallback;
        }
        match self.domain.iter().position(|k| k == key) {
            Some(i) => self.palette[i % self.palette.len()],
            None => self.fallback,
        }
    }
}
