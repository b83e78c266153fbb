//! Declarative world setup, loaded from JSON.
//!
//! Field names follow the option objects scenarios have always been written with:
//!
//! ```json
//! {
//!   "constants": { "gravity": 9.8 },
//!   "bodies": [
//!     { "position": { "x": 5, "y": 90 }, "size": { "width": 90, "height": 5 },
//!       "flags": ["hasCollider"] },
//!     { "position": { "x": 50, "y": 10 }, "size": { "width": 2, "height": 2 },
//!       "velocity": { "size": 0, "rad": 0 },
//!       "flags": ["gravity", "hasCollider", "reactsCollider"] }
//!   ]
//! }
//! ```

use crate::{
    body::{Body, Flags, Size},
    config::PhysicalConstants,
    velocity::Velocity,
    world::World,
};

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ultraviolet::DVec2;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("body {index}: {reason}")]
    InvalidBody { index: usize, reason: &'static str },
    #[error("gravity must be finite")]
    InvalidGravity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagName {
    HasCollider,
    ReactsCollider,
    Gravity,
}

impl From<FlagName> for Flags {
    fn from(name: FlagName) -> Self {
        match name {
            FlagName::HasCollider => Flags::HAS_COLLIDER,
            FlagName::ReactsCollider => Flags::REACTS_COLLIDER,
            FlagName::Gravity => Flags::GRAVITY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Polar velocity as written in scenario files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    pub size: f64,
    pub rad: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    pub size: Size,
    pub position: Point,
    pub velocity: VelocityConfig,
    pub elasticity: f64,
    pub flags: Vec<FlagName>,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            size: Body::DEFAULT_SIZE,
            position: Point::default(),
            velocity: VelocityConfig::default(),
            elasticity: 1.0,
            flags: Vec::new(),
        }
    }
}

impl BodyConfig {
    fn validate(&self, index: usize) -> Result<(), ScenarioError> {
        let invalid = |reason| Err(ScenarioError::InvalidBody { index, reason });

        if !(self.size.width.is_finite() && self.size.height.is_finite()) {
            return invalid("size must be finite");
        }
        if self.size.width < 0.0 || self.size.height < 0.0 {
            return invalid("size must not be negative");
        }
        if !(self.position.x.is_finite() && self.position.y.is_finite()) {
            return invalid("position must be finite");
        }
        if !(self.velocity.size.is_finite() && self.velocity.rad.is_finite()) {
            return invalid("velocity must be finite");
        }
        if !self.elasticity.is_finite() {
            return invalid("elasticity must be finite");
        }
        Ok(())
    }

    pub fn to_body(&self) -> Body {
        let flags = self
            .flags
            .iter()
            .fold(Flags::NONE, |acc, &name| acc | Flags::from(name));
        Body::new(
            DVec2::new(self.position.x, self.position.y),
            self.size,
            Velocity::new(self.velocity.size, self.velocity.rad),
            self.elasticity,
            flags,
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub constants: PhysicalConstants,
    pub bodies: Vec<BodyConfig>,
}

impl Scenario {
    pub fn from_json(text: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.constants.gravity.is_finite() {
            return Err(ScenarioError::InvalidGravity);
        }
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }
        Ok(())
    }

    /// Builds a world holding every body in file order.
    pub fn into_world(self) -> Result<World, ScenarioError> {
        self.validate()?;
        let mut world = World::with_constants(self.constants);
        for body in &self.bodies {
            world.add_body(body.to_body());
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR_AND_BALL: &str = r#"{
        "bodies": [
            { "position": { "x": 5, "y": 90 }, "size": { "width": 90, "height": 5 },
              "flags": ["hasCollider"] },
            { "position": { "x": 50, "y": 10 }, "size": { "width": 2, "height": 2 },
              "velocity": { "size": 0, "rad": 0 },
              "flags": ["gravity", "hasCollider", "reactsCollider"] }
        ]
    }"#;

    #[test]
    fn loads_bodies_in_order() {
        let world = Scenario::from_json(FLOOR_AND_BALL)
            .and_then(Scenario::into_world)
            .unwrap();
        assert_eq!(world.constants.gravity, 9.8);
        assert_eq!(world.bodies().len(), 2);

        let floor = world.bodies()[0];
        assert_eq!(floor.flags, Flags::HAS_COLLIDER);
        assert_eq!(floor.size, Size::new(90.0, 5.0));
        assert_eq!(floor.elasticity, 1.0);

        let ball = world.bodies()[1];
        assert_eq!(ball.position, DVec2::new(50.0, 10.0));
        assert!(ball.flags.contains(Flags::GRAVITY | Flags::HAS_COLLIDER | Flags::REACTS_COLLIDER));
    }

    #[test]
    fn omitted_fields_use_defaults() {
        let scenario = Scenario::from_json(r#"{ "constants": { "gravity": 1.5 }, "bodies": [{}] }"#).unwrap();
        assert_eq!(scenario.constants.gravity, 1.5);
        let body = scenario.bodies[0].to_body();
        assert_eq!(body, Body::default());
    }

    #[test]
    fn rejects_negative_size() {
        let err = Scenario::from_json(r#"{ "bodies": [{}, { "size": { "width": -1, "height": 2 } }] }"#)
            .unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidBody { index: 1, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Scenario::from_path("/nonexistent/scenario.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io { .. }));
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = Scenario::from_json(r#"{ "bodies": [{ "flags": ["sticky"] }] }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::Parse(_)));
    }

    #[test]
    fn rejects_non_finite_values_built_in_code() {
        let scenario = Scenario {
            bodies: vec![BodyConfig {
                elasticity: f64::NAN,
                ..BodyConfig::default()
            }],
            ..Scenario::default()
        };
        assert!(matches!(
            scenario.into_world(),
            Err(ScenarioError::InvalidBody { index: 0, .. })
        ));
    }
}
