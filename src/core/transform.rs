//! Rotation recovery from serialized CSS transform matrices.

use glam::Mat4;

/// Recover the carousel's Y-axis rotation, in degrees, from a computed
/// `transform` value.
///
/// Computed style serializes to `matrix(a, b, c, d, tx, ty)` or
/// `matrix3d(<16 values>)`. The Y angle falls out of the first and third
/// basis columns as `atan2(m31, m11)`; a 2D matrix carries no Y rotation.
/// `none`, or anything that does not parse, counts as no rotation.
pub fn rotation_from_transform(transform: &str) -> f32 {
    matrix_from_transform(transform)
        .map(|m| m.z_axis.x.atan2(m.x_axis.x).to_degrees())
        .unwrap_or(0.0)
}

fn matrix_from_transform(transform: &str) -> Option<Mat4> {
    let t = transform.trim();
    let (name, rest) = t.split_once('(')?;
    let args = rest.strip_suffix(')')?;
    let values = args
        .split(',')
        .map(|v| v.trim().parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .ok()?;
    match (name.trim(), values.len()) {
        // Column-major 2D affine matrix, embedded into 3D
        ("matrix", 6) => Some(Mat4::from_cols_array(&[
            values[0], values[1], 0.0, 0.0, //
            values[2], values[3], 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            values[4], values[5], 0.0, 1.0,
        ])),
        ("matrix3d", 16) => {
            let mut cols = [0.0f32; 16];
            cols.copy_from_slice(&values);
            Some(Mat4::from_cols_array(&cols))
        }
        _ => None,
    }
}
