//! Data type descriptors.

pub mod generic;

pub use generic::{GenericType, GenericTypeBuilder};

/// Common interface for data type descriptors.
///
/// Conversions return the converted values together with the unit they
/// ended up in.
pub trait DataType {
    fn name(&self) -> &str;

    /// Units this type can be expressed in. The first is the primary unit.
    fn units(&self) -> &[String];

    fn abbreviation(&self) -> &str;

    /// Lower limit below which values are physically impossible.
    fn min(&self) -> f64;

    /// Upper limit above which values are physically impossible.
    fn max(&self) -> f64;

    /// Whether values are instantaneous readings rather than averages or
    /// accumulations over a reporting interval.
    fn point_in_time(&self) -> bool;

    /// Whether values accumulate over time instead of averaging.
    fn cumulative(&self) -> bool;

    /// Converts values to imperial (IP) units.
    fn to_imperial<'a>(&self, values: Vec<f64>, from_unit: &'a str) -> (Vec<f64>, &'a str);

    /// Converts values to metric (SI) units.
    fn to_metric<'a>(&self, values: Vec<f64>, from_unit: &'a str) -> (Vec<f64>, &'a str);

    /// The primary unit.
    fn unit(&self) -> &str {
        self.units().first().map(String::as_str).unwrap_or_default()
    }
}
