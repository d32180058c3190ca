//! Generic data type for quantities without a dedicated descriptor.

use std::fmt;

use serde::Serialize;

use super::DataType;
use crate::error::DataTypeError;

/// Type for any data type that is not otherwise implemented.
///
/// Values are validated once by [`GenericTypeBuilder::build`] and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenericType {
    name: String,
    units: Vec<String>,
    min: f64,
    max: f64,
    abbreviation: String,
    unit_description: String,
    point_in_time: bool,
    cumulative: bool,
    min_file_format: f64,
    max_file_format: f64,
    missing_file_format: Option<f64>,
}

impl GenericType {
    /// Creates a generic type with every optional field at its default.
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Result<Self, DataTypeError> {
        Self::builder(name, unit).build()
    }

    pub fn builder(name: impl Into<String>, unit: impl Into<String>) -> GenericTypeBuilder {
        GenericTypeBuilder::new(name, unit)
    }

    /// Description of the units when numeric values stand for categories.
    pub fn unit_description(&self) -> &str {
        &self.unit_description
    }

    /// Lower limit when the type occurs in EPW files.
    pub fn min_file_format(&self) -> f64 {
        self.min_file_format
    }

    /// Upper limit when the type occurs in EPW files.
    pub fn max_file_format(&self) -> f64 {
        self.max_file_format
    }

    /// Value written for missing data in EPW files, if any.
    pub fn missing_file_format(&self) -> Option<f64> {
        self.missing_file_format
    }
}

impl DataType for GenericType {
    fn name(&self) -> &str {
        &self.name
    }

    fn units(&self) -> &[String] {
        &self.units
    }

    fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn point_in_time(&self) -> bool {
        self.point_in_time
    }

    fn cumulative(&self) -> bool {
        self.cumulative
    }

    fn to_imperial<'a>(&self, values: Vec<f64>, from_unit: &'a str) -> (Vec<f64>, &'a str) {
        (values, from_unit)
    }

    fn to_metric<'a>(&self, values: Vec<f64>, from_unit: &'a str) -> (Vec<f64>, &'a str) {
        (values, from_unit)
    }
}

impl fmt::Display for GenericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builder for [`GenericType`].
#[derive(Debug, Clone)]
pub struct GenericTypeBuilder {
    name: String,
    unit: String,
    min: f64,
    max: f64,
    abbreviation: Option<String>,
    unit_description: String,
    point_in_time: bool,
    cumulative: bool,
    min_file_format: f64,
    max_file_format: f64,
    missing_file_format: Option<f64>,
}

impl GenericTypeBuilder {
    pub fn new(name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            abbreviation: None,
            unit_description: String::new(),
            point_in_time: true,
            cumulative: false,
            min_file_format: f64::NEG_INFINITY,
            max_file_format: f64::INFINITY,
            missing_file_format: None,
        }
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Abbreviation for the type. Defaults to the name.
    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        self.abbreviation = Some(abbreviation.into());
        self
    }

    pub fn unit_description(mut self, description: impl Into<String>) -> Self {
        self.unit_description = description.into();
        self
    }

    pub fn point_in_time(mut self, point_in_time: bool) -> Self {
        self.point_in_time = point_in_time;
        self
    }

    /// Cumulative types cannot also be point-in-time.
    pub fn cumulative(mut self, cumulative: bool) -> Self {
        self.cumulative = cumulative;
        self
    }

    pub fn min_file_format(mut self, min: f64) -> Self {
        self.min_file_format = min;
        self
    }

    pub fn max_file_format(mut self, max: f64) -> Self {
        self.max_file_format = max;
        self
    }

    pub fn missing_file_format(mut self, missing: f64) -> Self {
        self.missing_file_format = Some(missing);
        self
    }

    /// Validates the fields and builds the type.
    pub fn build(self) -> Result<GenericType, DataTypeError> {
        require_text("name", &self.name)?;
        require_text("unit", &self.unit)?;
        require_number("min", self.min)?;
        require_number("max", self.max)?;

        if self.point_in_time && self.cumulative {
            return Err(DataTypeError::CumulativePointInTime);
        }

        require_number("min_file_format", self.min_file_format)?;
        require_number("max_file_format", self.max_file_format)?;
        if let Some(missing) = self.missing_file_format {
            require_number("missing_file_format", missing)?;
        }

        let abbreviation = self.abbreviation.unwrap_or_else(|| self.name.clone());

        Ok(GenericType {
            name: self.name,
            units: vec![self.unit],
            min: self.min,
            max: self.max,
            abbreviation,
            unit_description: self.unit_description,
            point_in_time: self.point_in_time,
            cumulative: self.cumulative,
            min_file_format: self.min_file_format,
            max_file_format: self.max_file_format,
            missing_file_format: self.missing_file_format,
        })
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), DataTypeError> {
    if value.is_empty() {
        return Err(DataTypeError::Empty {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn require_number(field: &'static str, value: f64) -> Result<(), DataTypeError> {
    if value.is_nan() {
        return Err(DataTypeError::NotANumber { field, value });
    }
    Ok(())
}
