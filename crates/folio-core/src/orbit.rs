//! Damped orbit controls for the standalone model viewer.

use crate::camera::Camera;
use crate::constants::{
    VIEWER_DAMPING, VIEWER_FOVY_DEG, VIEWER_MAX_DISTANCE, VIEWER_MIN_DISTANCE, VIEWER_START_EYE,
    VIEWER_ZFAR, VIEWER_ZNEAR, VIEWER_ZOOM_STEP,
};
use crate::error::SceneError;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPSILON: f32 = 1e-6;
// Below this the pending rotation is dropped instead of decaying forever.
const REST_THRESHOLD: f32 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerParams {
    pub start_eye: Vec3,
    pub target: Vec3,
    /// Fraction of the pending rotation kept back each update.
    pub damping: f32,
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self {
            start_eye: VIEWER_START_EYE,
            target: Vec3::ZERO,
            damping: VIEWER_DAMPING,
            zoom_step: VIEWER_ZOOM_STEP,
            min_distance: VIEWER_MIN_DISTANCE,
            max_distance: VIEWER_MAX_DISTANCE,
        }
    }
}

/// Spherical orbit around a fixed target with inertial rotation.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    params: ViewerParams,
    radius: f32,
    // azimuth around +Y, measured from +Z
    theta: f32,
    // polar angle from +Y
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl OrbitRig {
    pub fn new(params: ViewerParams) -> Result<Self, SceneError> {
        if params.min_distance > params.max_distance {
            return Err(SceneError::InvalidDistanceRange {
                min: params.min_distance,
                max: params.max_distance,
            });
        }
        if !(params.damping > 0.0 && params.damping <= 1.0) {
            return Err(SceneError::InvalidDamping(params.damping));
        }
        if !(params.zoom_step > 0.0 && params.zoom_step < 1.0) {
            return Err(SceneError::InvalidZoomStep(params.zoom_step));
        }
        let offset = params.start_eye - params.target;
        let radius = offset.length();
        let (theta, phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };
        Ok(Self {
            params,
            radius: radius.clamp(params.min_distance, params.max_distance),
            theta,
            phi: phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON),
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels on an
    /// element `element_height` pixels tall. A full element height is a full
    /// turn.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, element_height: f32) {
        if element_height <= 0.0 {
            return;
        }
        self.pending_theta -= TAU * dx / element_height;
        self.pending_phi -= TAU * dy / element_height;
    }

    /// Queue a zoom from a wheel event. Negative deltas move closer.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.pending_scale *= self.params.zoom_step;
        } else if delta_y > 0.0 {
            self.pending_scale /= self.params.zoom_step;
        }
    }

    /// Apply queued input and let the rotation coast out.
    pub fn update(&mut self) {
        let damping = self.params.damping;
        self.theta += self.pending_theta * damping;
        self.phi = (self.phi + self.pending_phi * damping).clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        self.radius = (self.radius * self.pending_scale)
            .clamp(self.params.min_distance, self.params.max_distance);

        self.pending_theta *= 1.0 - damping;
        self.pending_phi *= 1.0 - damping;
        if self.pending_theta.abs() < REST_THRESHOLD {
            self.pending_theta = 0.0;
        }
        if self.pending_phi.abs() < REST_THRESHOLD {
            self.pending_phi = 0.0;
        }
        self.pending_scale = 1.0;
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.params.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.params.target
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.params.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: VIEWER_FOVY_DEG.to_radians(),
            znear: VIEWER_ZNEAR,
            zfar: VIEWER_ZFAR,
        }
    }
}
