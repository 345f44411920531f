use polars::prelude::*;

/// Column layout of the moon-phase price dataset.
pub struct RecordSchema;

impl RecordSchema {
    pub const DATE: &'static str = "Date";
    pub const TICKER: &'static str = "Ticker";
    pub const MOON_PHASE: &'static str = "Moon_Phase";
    pub const OPEN: &'static str = "Open";
    pub const HIGH: &'static str = "High";
    pub const LOW: &'static str = "Low";
    pub const CLOSE: &'static str = "Close";
    pub const VOLUME: &'static str = "Volume";

    /// Columns every input file must carry. Extra columns are ignored.
    pub const REQUIRED_COLUMNS: [&'static str; 8] = [
        Self::DATE,
        Self::TICKER,
        Self::MOON_PHASE,
        Self::OPEN,
        Self::HIGH,
        Self::LOW,
        Self::CLOSE,
        Self::VOLUME,
    ];

    /// Numeric columns, parsed as f64.
    pub const NUMERIC_COLUMNS: [&'static str; 5] =
        [Self::OPEN, Self::HIGH, Self::LOW, Self::CLOSE, Self::VOLUME];

    /// Canonical typed schema, as produced by export.
    pub fn schema() -> Schema {
        Schema::from_iter(vec![
            Field::new(Self::DATE.into(), DataType::Date),
            Field::new(Self::TICKER.into(), DataType::String),
            Field::new(Self::MOON_PHASE.into(), DataType::String),
            Field::new(Self::OPEN.into(), DataType::Float64),
            Field::new(Self::HIGH.into(), DataType::Float64),
            Field::new(Self::LOW.into(), DataType::Float64),
            Field::new(Self::CLOSE.into(), DataType::Float64),
            Field::new(Self::VOLUME.into(), DataType::Float64),
        ])
    }

    /// Check that every required column is present. Types are not checked
    /// here; the loader coerces them column by column.
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let actual = df.schema();
        for name in Self::REQUIRED_COLUMNS {
            if !actual.contains(name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
