use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context as _, Error};
use convex_collision::{
    Cuboid, Disk, GjkError, Settings, Shape, ShapeError, Sphere, intersects_with,
};
use convex_math::Point;
use serde::Deserialize;
use serde_json as json;
use thiserror::Error;

/// A list of shape pairs to test against each other.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub pairs: Vec<PairDesc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairDesc {
    #[serde(default)]
    pub name: Option<String>,
    pub a: ShapeDesc,
    pub b: ShapeDesc,
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum ShapeDesc {
    Sphere {
        #[serde(default)]
        center: [f64; 3],
        radius: f64,
    },
    Disk {
        #[serde(default)]
        center: [f64; 3],
        radius: f64,
        #[serde(default = "default_normal")]
        normal: [f64; 3],
    },
    Cuboid {
        #[serde(default)]
        center: [f64; 3],
        height: f64,
        width: f64,
        depth: f64,
    },
}

fn default_normal() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

impl ShapeDesc {
    pub fn build(self) -> Result<Shape<f64>, ShapeError> {
        Ok(match self {
            ShapeDesc::Sphere { center, radius } => Sphere::new(center.into(), radius)?.into(),
            ShapeDesc::Disk {
                center,
                radius,
                normal,
            } => Disk::new(center.into(), radius, Point::from(normal))?.into(),
            ShapeDesc::Cuboid {
                center,
                height,
                width,
                depth,
            } => Cuboid::new(center.into(), height, width, depth)?.into(),
        })
    }
}

#[derive(Debug, Error)]
pub enum PairError {
    #[error("invalid shape `{which}`")]
    Shape {
        which: &'static str,
        #[source]
        source: ShapeError,
    },
    #[error("intersection test failed")]
    Gjk(#[from] GjkError),
}

impl PairDesc {
    pub fn check(&self, settings: &Settings) -> Result<bool, PairError> {
        let a = self
            .a
            .build()
            .map_err(|source| PairError::Shape { which: "a", source })?;
        let b = self
            .b
            .build()
            .map_err(|source| PairError::Shape { which: "b", source })?;
        Ok(intersects_with(settings, &a, &b)?)
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).with_context(|| format!("could not open scene {path:?}"))?;
        let scene: Self = json::from_reader(BufReader::new(file))
            .with_context(|| format!("could not parse scene {path:?}"))?;
        log::info!("loaded {} shape pairs from {path:?}", scene.pairs.len());
        Ok(scene)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(json::from_str(json)?)
    }

    /// Test every pair in the scene, yielding the name of each pair along with its result.
    ///
    /// Unnamed pairs are named after their position in the scene.
    pub fn check<'a>(
        &'a self,
        settings: &'a Settings,
    ) -> impl Iterator<Item = (String, Result<bool, PairError>)> + 'a {
        self.pairs.iter().enumerate().map(move |(i, pair)| {
            let name = pair.name.clone().unwrap_or_else(|| format!("pair {i}"));
            log::debug!("checking {name}");
            (name, pair.check(settings))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_parse() {
        let scene = Scene::from_json(
            r#"{
                "pairs": [
                    {
                        "name": "apart",
                        "a": { "sphere": { "center": [10, 10, 0], "radius": 5 } },
                        "b": { "cuboid": { "height": 5, "width": 5, "depth": 5 } }
                    },
                    {
                        "a": { "disk": { "radius": 1 } },
                        "b": { "sphere": { "center": [0, 0, 0.3], "radius": 0.5 } }
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.pairs.len(), 2);
        let Shape::Disk(disk) = scene.pairs[1].a.build().unwrap() else {
            panic!("expected a disk");
        };
        assert_eq!(disk.normal(), Point::new(0.0, 0.0, 1.0));

        let results: Vec<_> = scene
            .check(&Settings::default())
            .map(|(name, res)| (name, res.unwrap()))
            .collect();
        assert_eq!(
            results,
            vec![("apart".to_owned(), false), ("pair 1".to_owned(), true)]
        );
    }

    #[test]
    fn test_scene_invalid_shape() {
        let scene = Scene::from_json(
            r#"{
                "pairs": [{
                    "a": { "sphere": { "radius": 1 } },
                    "b": { "cuboid": { "height": 1, "width": -1, "depth": 1 } }
                }]
            }"#,
        )
        .unwrap();

        let (_, res) = scene.check(&Settings::default()).next().unwrap();
        assert!(matches!(
            res,
            Err(PairError::Shape {
                which: "b",
                source: ShapeError::NegativeDimension(_),
            })
        ));
    }

    #[test]
    fn test_scene_rejects_unknown_shapes() {
        let json = r#"{
            "pairs": [{ "a": { "cone": {} }, "b": { "sphere": { "radius": 1 } } }]
        }"#;
        assert!(Scene::from_json(json).is_err());
    }

    #[test]
    fn test_scene_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes/basic.json");
        let scene = Scene::load(&path).unwrap();
        for (name, res) in scene.check(&Settings::default()) {
            let expected = !name.starts_with("separate");
            assert_eq!(res.unwrap(), expected, "{name}");
        }
    }
}
