/// Report timestamp, milliseconds since the Unix epoch.
///
/// Integer milliseconds keep `Ord` exact; chronological sorting must never
/// depend on float comparison.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn millis(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;

    #[test]
    fn orders_by_millis() {
        assert!(Timestamp(1) < Timestamp(2));
        assert_eq!(Timestamp(5), Timestamp(5));
        assert!(Timestamp(-1) < Timestamp(0));
    }
}
