use std::fmt;

use uuid::Uuid;

use crate::domain::common::Timestamps;
use crate::domain::hedgehog::errors::AgeError;
use crate::domain::hedgehog::errors::ColorTypeError;
use crate::domain::hedgehog::errors::HedgehogError;
use crate::domain::hedgehog::errors::HedgehogNameError;

/// A hedgehog available for reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Hedgehog {
    pub id: HedgehogId,
    pub name: HedgehogName,
    pub description: Option<String>,
    pub age: Age,
    pub color_type: ColorType,
    pub timestamps: Timestamps,
}

impl Hedgehog {
    pub fn new(command: CreateHedgehogCommand) -> Self {
        Self {
            id: HedgehogId::new(),
            name: command.name,
            description: command.description,
            age: command.age,
            color_type: command.color_type,
            timestamps: Timestamps::now(),
        }
    }

    /// Apply the fields present in `command`, keeping the rest.
    ///
    /// # Errors
    /// * `MissingColorType` - `color_type` was explicitly cleared
    pub fn apply(&mut self, command: UpdateHedgehogCommand) -> Result<(), HedgehogError> {
        let color_type = match command.color_type {
            Some(None) => return Err(HedgehogError::MissingColorType),
            Some(Some(color_type)) => Some(color_type),
            None => None,
        };

        if let Some(name) = command.name {
            self.name = name;
        }
        if let Some(description) = command.description {
            self.description = description;
        }
        if let Some(age) = command.age {
            self.age = age;
        }
        if let Some(color_type) = color_type {
            self.color_type = color_type;
        }
        self.timestamps.touch();

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HedgehogId(pub Uuid);

impl HedgehogId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HedgehogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HedgehogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HedgehogName(String);

impl HedgehogName {
    pub fn new(name: String) -> Result<Self, HedgehogNameError> {
        if name.trim().is_empty() {
            return Err(HedgehogNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Age in years, kept to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Age(f64);

impl Age {
    pub fn new(years: f64) -> Result<Self, AgeError> {
        if !years.is_finite() || years < 0.0 {
            return Err(AgeError::OutOfRange);
        }
        Ok(Self((years * 10.0).round() / 10.0))
    }

    pub fn years(&self) -> f64 {
        self.0
    }
}

/// Coat color, free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorType(String);

impl ColorType {
    pub fn new(color_type: String) -> Result<Self, ColorTypeError> {
        if color_type.trim().is_empty() {
            return Err(ColorTypeError::Empty);
        }
        Ok(Self(color_type))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct CreateHedgehogCommand {
    pub name: HedgehogName,
    pub description: Option<String>,
    pub age: Age,
    pub color_type: ColorType,
}

/// Partial hedgehog update.
///
/// `None` leaves a field untouched. `Some(None)` clears an optional field;
/// for `color_type` it is rejected.
#[derive(Debug, Clone, Default)]
pub struct UpdateHedgehogCommand {
    pub name: Option<HedgehogName>,
    pub description: Option<Option<String>>,
    pub age: Option<Age>,
    pub color_type: Option<Option<ColorType>>,
}
