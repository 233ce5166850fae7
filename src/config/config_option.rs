use crate::types::err::{self};

/// A named configuration value, together with the (inclusive) bounds on the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfBounds { name: self.name }),
        }
    }

    /// Checks the current value of the option is within the bounds of the option.
    ///
    /// As the fields of an option are public the value may have been revised without [set](ConfigOption::set).
    pub fn check(&self) -> Result<(), err::ConfigError> {
        match self.min <= self.value && self.value <= self.max {
            true => Ok(()),
            false => Err(err::ConfigError::OutOfBounds { name: self.name }),
        }
    }
}
