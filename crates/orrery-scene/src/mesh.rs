//! Sphere and torus mesh generation.
//!
//! Produces position/normal/uv/index data ready for interleaving and GPU
//! upload by the render crate.

/// CPU mesh data: positions, normals, texture coordinates, and triangle
/// indices.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a latitude/longitude sphere of the given radius.
///
/// `width_segments` is the number of azimuthal divisions, `height_segments`
/// the number of polar divisions.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let phi = v * std::f32::consts::PI;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let theta = u * std::f32::consts::TAU;

            let sin_phi = phi.sin();
            let pos = [
                radius * sin_phi * theta.sin(),
                radius * phi.cos(),
                radius * sin_phi * theta.cos(),
            ];
            mesh.positions.push(pos);
            mesh.normals
                .push([pos[0] / radius, pos[1] / radius, pos[2] / radius]);
            mesh.uvs.push([u, v]);
        }
    }

    let stride = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * stride + ix;
            let b = a + stride;
            // Degenerate triangles at the poles are harmless and keep the
            // index pattern uniform.
            mesh.indices.extend_from_slice(&[a, b, a + 1]);
            mesh.indices.extend_from_slice(&[b, b + 1, a + 1]);
        }
    }

    mesh
}

/// Generate a torus lying in the XY plane around the Z axis.
///
/// `radius` is the distance from the torus center to the tube center,
/// `tube_radius` the radius of the tube itself.
pub fn torus(radius: f32, tube_radius: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::default();
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);

    for j in 0..=radial {
        let v = j as f32 / radial as f32 * std::f32::consts::TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * std::f32::consts::TAU;

            let cx = radius * u.cos();
            let cy = radius * u.sin();
            let pos = [
                (radius + tube_radius * v.cos()) * u.cos(),
                (radius + tube_radius * v.cos()) * u.sin(),
                tube_radius * v.sin(),
            ];
            let normal = [
                (pos[0] - cx) / tube_radius,
                (pos[1] - cy) / tube_radius,
                pos[2] / tube_radius,
            ];
            mesh.positions.push(pos);
            mesh.normals.push(normal);
            mesh.uvs
                .push([i as f32 / tubular as f32, j as f32 / radial as f32]);
        }
    }

    let stride = tubular + 1;
    for j in 0..radial {
        for i in 0..tubular {
            let a = j * stride + i;
            let b = a + stride;
            // Winding here is the mirror of the sphere's: the u/v roles are
            // swapped, so the quad split flips to keep faces outward.
            mesh.indices.extend_from_slice(&[a, a + 1, b]);
            mesh.indices.extend_from_slice(&[b, a + 1, b + 1]);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_vertex_and_index_counts() {
        let mesh = uv_sphere(700.0, 128, 128);
        assert_eq!(mesh.vertex_count(), 129 * 129);
        assert_eq!(mesh.triangle_count(), 128 * 128 * 2);
    }

    #[test]
    fn test_sphere_vertices_lie_on_sphere() {
        let mesh = uv_sphere(100.0, 16, 16);
        for (i, p) in mesh.positions.iter().enumerate() {
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!(
                (len - 100.0).abs() < 1e-2,
                "vertex {i} at distance {len}, expected 100"
            );
        }
    }

    #[test]
    fn test_sphere_normals_are_unit_radial() {
        let mesh = uv_sphere(50.0, 8, 8);
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            let n_len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((n_len - 1.0).abs() < 1e-4);
            // Normal parallel to position.
            let dot = p[0] * n[0] + p[1] * n[1] + p[2] * n[2];
            assert!((dot - 50.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_sphere_indices_in_range() {
        let mesh = uv_sphere(10.0, 12, 7);
        let max = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_torus_counts() {
        let mesh = torus(1000.0, 5.0, 16, 100);
        assert_eq!(mesh.vertex_count(), 17 * 101);
        assert_eq!(mesh.triangle_count(), 16 * 100 * 2);
    }

    #[test]
    fn test_torus_vertices_within_tube_of_ring() {
        let mesh = torus(1000.0, 5.0, 16, 100);
        for p in &mesh.positions {
            // Distance from the center circle must equal the tube radius.
            let ring_dist = (p[0] * p[0] + p[1] * p[1]).sqrt();
            let d = ((ring_dist - 1000.0).powi(2) + p[2] * p[2]).sqrt();
            assert!((d - 5.0).abs() < 1e-2, "tube distance {d}, expected 5");
        }
    }

    #[test]
    fn test_torus_lies_in_xy_plane_band() {
        let mesh = torus(1000.0, 5.0, 16, 100);
        // Z extent is bounded by the tube radius before any pre-rotation.
        assert!(mesh.positions.iter().all(|p| p[2].abs() <= 5.0 + 1e-3));
    }
}
