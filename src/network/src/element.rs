//! The circuit elements which can be placed in a network.
//!
//! Every element carries an algebraic [`Symbol`] derived from its kind and
//! name. The derivation is pure, constructing the same element twice yields
//! the same symbol.
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{error::Error, symbol::Symbol};

lazy_static! {
    pub static ref RE_NAME: regex::Regex = Regex::new(r"^[A-Za-z0-9_]+$").unwrap();
}

///The quantity of the controlling element which scales a dependent source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Current,
    Voltage,
}

impl FromStr for Quantity {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "current" | "i" => Ok(Quantity::Current),
            "voltage" | "v" => Ok(Quantity::Voltage),
            _ => Err(Error::InvalidArgument(format!(
                "unknown controlling quantity '{}'",
                s
            ))),
        }
    }
}

impl std::convert::TryFrom<&str> for Quantity {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Quantity::Current => write!(f, "current"),
            Quantity::Voltage => write!(f, "voltage"),
        }
    }
}

/// The element kinds.
///
/// Only the dependent sources carry a controlling reference and a scaling factor.
#[derive(Clone, Debug)]
pub enum ElementKind {
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
    CurrentSource,
    CurrentControlledCurrentSource {
        controlling_reference: String,
        scaling_factor: f64,
    },
    VoltageControlledCurrentSource {
        controlling_reference: String,
        scaling_factor: f64,
    },
}

impl ElementKind {
    ///The spice element letter, used as symbol prefix.
    pub fn prefix(&self) -> char {
        match self {
            ElementKind::Resistor => 'R',
            ElementKind::Capacitor => 'C',
            ElementKind::Inductor => 'L',
            ElementKind::VoltageSource => 'V',
            ElementKind::CurrentSource => 'I',
            ElementKind::CurrentControlledCurrentSource { .. } => 'F',
            ElementKind::VoltageControlledCurrentSource { .. } => 'G',
        }
    }

    fn control(&self) -> Option<(&str, f64)> {
        match self {
            ElementKind::CurrentControlledCurrentSource {
                controlling_reference,
                scaling_factor,
            }
            | ElementKind::VoltageControlledCurrentSource {
                controlling_reference,
                scaling_factor,
            } => Some((controlling_reference.as_str(), *scaling_factor)),
            _ => None,
        }
    }
}

impl PartialEq for ElementKind {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && match (self.control(), other.control()) {
                (Some((r0, f0)), Some((r1, f1))) => r0 == r1 && f0.to_bits() == f1.to_bits(),
                (None, None) => true,
                _ => false,
            }
    }
}
impl Eq for ElementKind {}
impl Hash for ElementKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Some((reference, factor)) = self.control() {
            reference.hash(state);
            factor.to_bits().hash(state);
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ElementKind::Resistor => write!(f, "Resistor"),
            ElementKind::Capacitor => write!(f, "Capacitor"),
            ElementKind::Inductor => write!(f, "Inductor"),
            ElementKind::VoltageSource => write!(f, "VoltageSource"),
            ElementKind::CurrentSource => write!(f, "CurrentSource"),
            ElementKind::CurrentControlledCurrentSource { .. } => {
                write!(f, "CurrentControlledCurrentSource")
            }
            ElementKind::VoltageControlledCurrentSource { .. } => {
                write!(f, "VoltageControlledCurrentSource")
            }
        }
    }
}

/// A circuit element with its algebraic symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Element {
    kind: ElementKind,
    name: String,
    symbol: Symbol,
}

impl Element {
    /// Create an element of the given kind.
    ///
    /// # Arguments
    ///
    /// * `kind`     - The element kind, dependent sources with their control.
    /// * `name`     - Element name, `[A-Za-z0-9_]+`.
    /// * `return`   - The element or `Error::InvalidArgument`.
    pub fn new(kind: ElementKind, name: &str) -> Result<Self, Error> {
        check_name("element name", name)?;
        if let Some((reference, factor)) = kind.control() {
            check_name("controlling reference", reference)?;
            if !factor.is_finite() {
                return Err(Error::InvalidArgument(format!(
                    "scaling factor of {} must be finite, got {}",
                    name, factor
                )));
            }
        }
        let symbol = symbol_of(&kind, name);
        Ok(Self {
            kind,
            name: name.to_string(),
            symbol,
        })
    }

    pub fn resistor(name: &str) -> Result<Self, Error> {
        Self::new(ElementKind::Resistor, name)
    }

    pub fn capacitor(name: &str) -> Result<Self, Error> {
        Self::new(ElementKind::Capacitor, name)
    }

    pub fn inductor(name: &str) -> Result<Self, Error> {
        Self::new(ElementKind::Inductor, name)
    }

    pub fn voltage_source(name: &str) -> Result<Self, Error> {
        Self::new(ElementKind::VoltageSource, name)
    }

    pub fn current_source(name: &str) -> Result<Self, Error> {
        Self::new(ElementKind::CurrentSource, name)
    }

    ///Current source scaled by the current through `controlling_reference`.
    pub fn current_controlled_current_source(
        name: &str,
        controlling_reference: &str,
        scaling_factor: f64,
    ) -> Result<Self, Error> {
        Self::new(
            ElementKind::CurrentControlledCurrentSource {
                controlling_reference: controlling_reference.to_string(),
                scaling_factor,
            },
            name,
        )
    }

    ///Current source scaled by the voltage across `controlling_reference`.
    pub fn voltage_controlled_current_source(
        name: &str,
        controlling_reference: &str,
        scaling_factor: f64,
    ) -> Result<Self, Error> {
        Self::new(
            ElementKind::VoltageControlledCurrentSource {
                controlling_reference: controlling_reference.to_string(),
                scaling_factor,
            },
            name,
        )
    }

    ///Dependent current source, the constructor is selected by the quantity.
    pub fn dependent_current_source(
        name: &str,
        quantity: Quantity,
        controlling_reference: &str,
        scaling_factor: f64,
    ) -> Result<Self, Error> {
        match quantity {
            Quantity::Current => {
                Self::current_controlled_current_source(name, controlling_reference, scaling_factor)
            }
            Quantity::Voltage => {
                Self::voltage_controlled_current_source(name, controlling_reference, scaling_factor)
            }
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn controlling_reference(&self) -> Option<&str> {
        self.kind.control().map(|(reference, _)| reference)
    }

    pub fn scaling_factor(&self) -> Option<f64> {
        self.kind.control().map(|(_, factor)| factor)
    }

    pub fn is_dependent_source(&self) -> bool {
        self.kind.control().is_some()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.symbol)
    }
}

/// Derive the symbol for an element.
///
/// The kind prefix is added unless the name already starts with it,
/// `R1` and `1` both give the resistor symbol `R1`. The prefix is case
/// sensitive, a current source `in` is `Iin`.
pub fn symbol_of(kind: &ElementKind, name: &str) -> Symbol {
    let prefix = kind.prefix();
    if name.starts_with(prefix) {
        Symbol::new(name)
    } else {
        Symbol::new(format!("{}{}", prefix, name))
    }
}

fn check_name(what: &str, name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidArgument(format!("{} is empty", what)));
    }
    if !RE_NAME.is_match(name) {
        return Err(Error::InvalidArgument(format!(
            "{} '{}' contains invalid characters",
            what, name
        )));
    }
    Ok(())
}
