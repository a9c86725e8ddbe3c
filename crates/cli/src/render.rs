//! JSON rendering of regions for downstream painters.

use nalgebra::SVector;
use serde_json::{json, Value};
use spanregion::{AnyRegion, Mode, Region};

fn point<const D: usize>(p: &SVector<f64, D>) -> Value {
    json!(p.iter().copied().collect::<Vec<f64>>())
}

fn ring<const D: usize>(ps: &[SVector<f64, D>]) -> Value {
    Value::Array(ps.iter().map(point).collect())
}

fn region_body<const D: usize>(r: &Region<SVector<f64, D>>) -> Value {
    match r {
        Region::Empty => json!({ "points": [] }),
        Region::Point(p) => json!({ "points": [point(p)] }),
        Region::Segment(a, b) => json!({ "points": [point(a), point(b)] }),
        Region::Ray { origin, dir, a, b } => json!({
            "origin": point(origin),
            "dir": point(dir),
            "points": [point(a), point(b)],
        }),
        Region::Line { through, dir, a, b } => json!({
            "through": point(through),
            "dir": point(dir),
            "points": [point(a), point(b)],
        }),
        Region::Polygon(ps) | Region::Silhouette(ps) => json!({ "points": ring(ps) }),
        Region::FullDomain(faces) => json!({
            "faces": faces.iter().map(|f| ring(f)).collect::<Vec<_>>(),
        }),
    }
}

/// `{kind, mode, rule, dim, points | faces, ...}` for one computed region.
pub fn region_json(mode: Mode, region: &AnyRegion) -> Value {
    let (dim, mut body) = match region {
        AnyRegion::Plane(r) => (2, region_body(r)),
        AnyRegion::Space(r) => (3, region_body(r)),
    };
    if let Value::Object(map) = &mut body {
        map.insert("kind".into(), json!(region.kind()));
        map.insert("mode".into(), json!(mode.name()));
        map.insert("rule".into(), json!(mode.rule()));
        map.insert("dim".into(), json!(dim));
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Vector3};

    #[test]
    fn line_carries_chord_and_direction() {
        let r = AnyRegion::Plane(Region::Line {
            through: vector![0.0, 0.0],
            dir: vector![1.0, 0.0],
            a: vector![-10.0, 0.0],
            b: vector![10.0, 0.0],
        });
        let v = region_json(Mode::Linear, &r);
        assert_eq!(v["kind"], "line");
        assert_eq!(v["mode"], "linear");
        assert_eq!(v["dim"], 2);
        assert_eq!(v["points"], json!([[-10.0, 0.0], [10.0, 0.0]]));
        assert_eq!(v["dir"], json!([1.0, 0.0]));
    }

    #[test]
    fn full_domain_lists_faces() {
        let face = vec![Vector3::zeros(), Vector3::x(), Vector3::y()];
        let r = AnyRegion::Space(Region::FullDomain(vec![face.clone(), face]));
        let v = region_json(Mode::Affine, &r);
        assert_eq!(v["kind"], "full");
        assert_eq!(v["faces"].as_array().map(|a| a.len()), Some(2));
        assert!(v.get("points").is_none());
    }
}
