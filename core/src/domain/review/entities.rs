use serde::Serialize;

/// Exactly three review candidates, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSet([String; 3]);

impl ReviewSet {
    pub const SIZE: usize = 3;

    pub fn new(reviews: [String; 3]) -> Self {
        Self(reviews)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<ReviewSet> for Vec<String> {
    fn from(set: ReviewSet) -> Self {
        set.0.into()
    }
}

impl<'a> IntoIterator for &'a ReviewSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
