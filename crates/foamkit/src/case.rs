//! Case file generators.
//!
//! Builders for the files a case needs before the solver runs: initial
//! and boundary conditions for the velocity and pressure fields, and the
//! `sampleDict` that drives post-run sampling. The builders produce
//! [`FieldFile`] values; [`crate::write`] turns those into text.

use crate::dict::Dictionary;
use crate::field::FieldFile;
use crate::foundation::DimensionSet;
use crate::value::Value;

/// `volVectorField` velocity file with a uniform internal value and an
/// empty `boundaryField`.
pub fn velocity_field(object: &str, internal: [f64; 3]) -> FieldFile {
    let mut file = FieldFile::vol_vector_field(object);
    file.header.location = Some("0".to_string());
    file.body.set("dimensions", DimensionSet::velocity());
    file.body
        .set("internalField", Value::uniform(Value::Vector(internal)));
    file.body.set("boundaryField", Dictionary::new());
    file
}

/// `volScalarField` kinematic pressure file with a uniform internal
/// value and an empty `boundaryField`.
pub fn pressure_field(object: &str, internal: f64) -> FieldFile {
    let mut file = FieldFile::vol_scalar_field(object);
    file.header.location = Some("0".to_string());
    file.body
        .set("dimensions", DimensionSet::kinematic_pressure());
    file.body
        .set("internalField", Value::uniform(Value::Number(internal)));
    file.body.set("boundaryField", Dictionary::new());
    file
}

/// `fixedValue` patch dictionary.
pub fn fixed_value(value: Value) -> Dictionary {
    Dictionary::new()
        .with("type", Value::word("fixedValue"))
        .with("value", Value::uniform(value))
}

/// `zeroGradient` patch dictionary.
pub fn zero_gradient() -> Dictionary {
    Dictionary::new().with("type", Value::word("zeroGradient"))
}

/// `slip` patch dictionary.
pub fn slip() -> Dictionary {
    Dictionary::new().with("type", Value::word("slip"))
}

/// `wedge` patch dictionary.
pub fn wedge() -> Dictionary {
    Dictionary::new().with("type", Value::word("wedge"))
}

/// `partialSlip` patch dictionary.
pub fn partial_slip(value_fraction: f64) -> Dictionary {
    Dictionary::new()
        .with("type", Value::word("partialSlip"))
        .with(
            "valueFraction",
            Value::uniform(Value::Number(value_fraction)),
        )
}

/// Builder for a `sampleDict` system file.
///
/// ```
/// use foamkit::case::SampleDict;
///
/// let dict = SampleDict::new()
///     .patch_surface("frontWall", &["front"], false)
///     .field("U")
///     .to_field_file();
/// assert_eq!(dict.header.class, "dictionary");
/// ```
#[derive(Debug, Clone)]
pub struct SampleDict {
    interpolation_scheme: String,
    set_format: String,
    surface_format: String,
    sets: Vec<SampleSet>,
    surfaces: Vec<SampleSurface>,
    fields: Vec<String>,
}

/// A `uniform` line set sampled between two points.
#[derive(Debug, Clone)]
struct SampleSet {
    name: String,
    axis: String,
    start: [f64; 3],
    end: [f64; 3],
    n_points: u32,
}

/// A `patch` surface over one or more mesh patches.
#[derive(Debug, Clone)]
struct SampleSurface {
    name: String,
    patches: Vec<String>,
    interpolate: bool,
}

impl Default for SampleDict {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleDict {
    /// Builder with the conventional defaults: `cellPoint` interpolation,
    /// `raw` set output, `vtk` surface output.
    pub fn new() -> Self {
        Self {
            interpolation_scheme: "cellPoint".to_string(),
            set_format: "raw".to_string(),
            surface_format: "vtk".to_string(),
            sets: Vec::new(),
            surfaces: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn interpolation_scheme(mut self, scheme: &str) -> Self {
        self.interpolation_scheme = scheme.to_string();
        self
    }

    pub fn set_format(mut self, format: &str) -> Self {
        self.set_format = format.to_string();
        self
    }

    pub fn surface_format(mut self, format: &str) -> Self {
        self.surface_format = format.to_string();
        self
    }

    /// Add a `uniform` line set sampled over `n_points` points.
    pub fn line_set(
        mut self,
        name: &str,
        axis: &str,
        start: [f64; 3],
        end: [f64; 3],
        n_points: u32,
    ) -> Self {
        self.sets.push(SampleSet {
            name: name.to_string(),
            axis: axis.to_string(),
            start,
            end,
            n_points,
        });
        self
    }

    /// Add a `patch` surface over the given mesh patches.
    pub fn patch_surface(mut self, name: &str, patches: &[&str], interpolate: bool) -> Self {
        self.surfaces.push(SampleSurface {
            name: name.to_string(),
            patches: patches.iter().map(|p| p.to_string()).collect(),
            interpolate,
        });
        self
    }

    /// Add one sampled field.
    pub fn field(mut self, name: &str) -> Self {
        self.fields.push(name.to_string());
        self
    }

    /// Render the builder into a class `dictionary` file named
    /// `sampleDict`.
    pub fn to_field_file(&self) -> FieldFile {
        let mut file = FieldFile::dictionary("sampleDict");
        file.header.location = Some("system".to_string());

        let body = &mut file.body;
        body.set(
            "interpolationScheme",
            Value::word(&self.interpolation_scheme),
        );
        body.set("setFormat", Value::word(&self.set_format));
        body.set("surfaceFormat", Value::word(&self.surface_format));

        let sets = self
            .sets
            .iter()
            .map(|set| {
                let dict = Dictionary::new()
                    .with("type", Value::word("uniform"))
                    .with("axis", Value::word(&set.axis))
                    .with("start", Value::Vector(set.start))
                    .with("end", Value::Vector(set.end))
                    .with("nPoints", Value::Number(set.n_points as f64));
                crate::value::ListEntry::Named(set.name.clone(), dict)
            })
            .collect();
        body.set("sets", Value::List(sets));

        let surfaces = self
            .surfaces
            .iter()
            .map(|surface| {
                let dict = Dictionary::new()
                    .with("type", Value::word("patch"))
                    .with(
                        "patches",
                        Value::word_list(surface.patches.iter().map(String::as_str)),
                    )
                    .with(
                        "interpolate",
                        Value::word(if surface.interpolate { "true" } else { "false" }),
                    );
                crate::value::ListEntry::Named(surface.name.clone(), dict)
            })
            .collect();
        body.set("surfaces", Value::List(surfaces));

        body.set(
            "fields",
            Value::word_list(self.fields.iter().map(String::as_str)),
        );

        file
    }
}
