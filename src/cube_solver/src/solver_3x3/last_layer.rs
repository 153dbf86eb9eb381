use std::{cmp::Reverse, ops::ControlFlow};

use cube_core::{Color, FaceId, Move};

use super::{PhaseResult, RING, Solver3x3, count, relative_offsets, ring_next, ring_prev};
use crate::{SolverError, Unsolvable};

use FaceId::{D, U};

// The corners each parameter twists in opposite directions, and the parameter
// value at which the twist runs backwards.
const PAIR_TWISTS: [(usize, usize, u8); 4] = [(0, 2, 2), (3, 1, 2), (1, 0, 1), (2, 3, 1)];

// Bottom corner `k` sits between `RING[k]` and `RING[k + 1]`.
fn corner_sides(k: usize) -> (FaceId, FaceId) {
    (RING[k % 4], RING[(k + 1) % 4])
}

impl Solver3x3<'_> {
    /// `A D S D' S' A'` with `S` the ring face before `A`. Flips two bottom edges.
    fn cross_commutator(&self, a: FaceId) -> Result<Vec<Move>, SolverError> {
        let s = ring_prev(a);
        Ok(vec![
            self.turn(a, true)?,
            self.turn(D, true)?,
            self.turn(s, true)?,
            self.turn(D, false)?,
            self.turn(s, false)?,
            self.turn(a, false)?,
        ])
    }

    /// Swaps the bottom edges under `A` and the face after it, cycling the other
    /// two bottom edges around with the layer.
    fn edge_swap(&self, a: FaceId) -> Result<Vec<Move>, SolverError> {
        let s = ring_prev(a);
        let (s_cw, s_ccw) = (self.turn(s, true)?, self.turn(s, false)?);
        let d = self.turn(D, true)?;
        Ok(vec![s_cw, d, s_ccw, d, s_cw, d, d, s_ccw])
    }

    /// Cycles three bottom corners, leaving the one between `prev(A)` and `A` alone.
    fn corner_cycle(&self, a: FaceId) -> Result<Vec<Move>, SolverError> {
        let s = ring_prev(a);
        let o = ring_next(a);
        let (d_cw, d_ccw) = (self.turn(D, true)?, self.turn(D, false)?);
        Ok(vec![
            d_cw,
            self.turn(s, true)?,
            d_ccw,
            self.turn(o, false)?,
            d_cw,
            self.turn(s, false)?,
            d_ccw,
            self.turn(o, true)?,
        ])
    }

    /// Twists the bottom corner in slot `k` in place. The top layer is disturbed
    /// until the twist is undone.
    fn corner_twist(&self, k: usize) -> Result<Vec<Move>, SolverError> {
        let side = RING[k];
        let once = [
            self.turn(side, false)?,
            self.turn(U, false)?,
            self.turn(side, true)?,
            self.turn(U, true)?,
        ];
        Ok([once, once].concat())
    }

    /// Turns the bottom layer so corner `from` lands in slot `to`.
    fn corner_shift(&self, from: usize, to: usize) -> Result<Vec<Move>, SolverError> {
        let (first, second) = corner_sides(from);
        let location = self.position(first, &[D, second])?;
        self.rotate_until(D, location, RING[to])
    }

    /// Twists corner `a` one way and corner `b` the other.
    fn corner_pair_twist(&self, a: usize, b: usize) -> Result<Vec<Move>, SolverError> {
        let first = self.corner_shift(b, 0)?;
        let a_now = (a + 4 - b) % 4;
        let second = self.corner_shift(a_now, 0)?;
        let back = self.corner_shift((8 - b - a_now) % 4, 0)?;
        let twist = self.corner_twist(0)?;
        Ok([first, twist.clone(), second, Move::invert(&twist), back].concat())
    }

    fn down_edges_oriented(&self) -> Result<[bool; 4], SolverError> {
        let mut oriented = [false; 4];
        for (k, face) in RING.into_iter().enumerate() {
            oriented[k] = self.color(self.position(D, &[face])?)? == self.face_colors[D];
        }
        Ok(oriented)
    }

    /// Which bottom edges would be home if the layer were turned back `steps` slots.
    fn down_edge_matches(&self, steps: usize) -> Result<[bool; 4], SolverError> {
        let mut matches = [false; 4];
        for (k, face) in RING.into_iter().enumerate() {
            let location = self.position(RING[(k + steps) % 4], &[D])?;
            matches[k] = self.color(location)? == self.face_colors[face];
        }
        Ok(matches)
    }

    fn corner_home_colors(&self, k: usize) -> Vec<Color> {
        let (first, second) = corner_sides(k);
        let mut colors = vec![
            self.face_colors[D],
            self.face_colors[first],
            self.face_colors[second],
        ];
        colors.sort();
        colors
    }

    fn corner_colors_at(&self, k: usize) -> Result<Vec<Color>, SolverError> {
        let (first, second) = corner_sides(k);
        self.piece_colors(self.position(D, &[first, second])?)
    }

    fn corners_fitting(&self) -> Result<[bool; 4], SolverError> {
        let mut fits = [false; 4];
        for (k, fit) in fits.iter_mut().enumerate() {
            *fit = self.corner_colors_at(k)? == self.corner_home_colors(k);
        }
        Ok(fits)
    }

    /// 0 when the bottom color of corner `k` faces down, 1 when it faces the first
    /// of its ring faces and 2 for the second.
    fn corner_orientation(&self, k: usize) -> Result<Option<u8>, SolverError> {
        let (first, second) = corner_sides(k);
        for (face, neighbours, value) in [
            (D, [first, second], 0),
            (first, [D, second], 1),
            (second, [D, first], 2),
        ] {
            if self.color(self.position(face, &neighbours)?)? == self.face_colors[D] {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    pub(super) fn down_cross(&mut self) -> PhaseResult {
        for _ in 0..3 {
            let oriented = self.down_edges_oriented()?;
            match count(&oriented) {
                4 => return Ok(ControlFlow::Continue(())),
                n if n % 2 == 1 => return Ok(ControlFlow::Break(Unsolvable::OddDownCross)),
                0 => {
                    let alg = self.cross_commutator(RING[0])?;
                    self.execute(&alg)?;
                }
                _ => {
                    for (i, a) in RING.into_iter().enumerate() {
                        let offsets = relative_offsets(&oriented, i);
                        if offsets == [1, 3] {
                            let alg = Move::invert(&self.cross_commutator(a)?);
                            self.execute(&alg)?;
                            break;
                        }
                        if offsets == [1, 2] {
                            let alg = self.cross_commutator(a)?;
                            self.execute(&alg)?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(if count(&self.down_edges_oriented()?) == 4 {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(Unsolvable::OddDownCross)
        })
    }

    pub(super) fn down_edges(&mut self) -> PhaseResult {
        for _ in 0..3 {
            let mut best = (0, self.down_edge_matches(0)?);
            for steps in 1..4 {
                let matches = self.down_edge_matches(steps)?;
                if count(&matches) > count(&best.1) {
                    best = (steps, matches);
                }
            }
            let (steps, matches) = best;

            let align = self.rotate_until(D, self.position(RING[steps], &[D])?, RING[0])?;
            self.execute(&align)?;
            if count(&matches) == 4 {
                return Ok(ControlFlow::Continue(()));
            }

            let pivot = (0..4)
                .find(|&i| relative_offsets(&matches, i) == [2, 3])
                .unwrap_or(0);
            let alg = self.edge_swap(RING[pivot])?;
            self.execute(&alg)?;
        }

        Ok(if count(&self.down_edge_matches(0)?) == 4 {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(Unsolvable::DownEdgeParity)
        })
    }

    pub(super) fn down_corner_permutation(&mut self) -> PhaseResult {
        for _ in 0..3 {
            let fits = self.corners_fitting()?;
            match count(&fits) {
                4 => return Ok(ControlFlow::Continue(())),
                0 => {
                    let alg = self.corner_cycle(RING[0])?;
                    self.execute(&alg)?;
                }
                1 => {
                    let k = fits.iter().position(|&fit| fit).unwrap_or_default();
                    let front = (k + 1) % 4;
                    let mut alg = self.corner_cycle(RING[front])?;
                    if self.corner_colors_at(front + 1)? != self.corner_home_colors(front) {
                        alg = Move::invert(&alg);
                    }
                    self.execute(&alg)?;
                }
                _ => return Ok(ControlFlow::Break(Unsolvable::CornerPermutationParity)),
            }
        }

        Ok(if count(&self.corners_fitting()?) == 4 {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(Unsolvable::CornerPermutationParity)
        })
    }

    pub(super) fn down_corner_orientation(&mut self) -> PhaseResult {
        let mut orientations = [0; 4];
        for (k, orientation) in orientations.iter_mut().enumerate() {
            let Some(value) = self.corner_orientation(k)? else {
                return Ok(ControlFlow::Break(Unsolvable::InconsistentStickers));
            };
            *orientation = value;
        }

        let x = orientations[0];
        let y = (3 - orientations[1]) % 3;
        let z = (3 - orientations[2]) % 3;
        let w = orientations[3];
        if (x + w) % 3 != (y + z) % 3 {
            return Ok(ControlFlow::Break(Unsolvable::CornerOrientationParity));
        }

        // Every t solves the system, prefer the one needing the fewest twists
        let Some(parameters) = (0..3u8)
            .map(|t| [(6 - t - z) % 3, (6 - t - w) % 3, (t + z + 3 - x) % 3, t])
            .min_by_key(|p| Reverse(p.iter().filter(|&&v| v == 0).count()))
        else {
            return Ok(ControlFlow::Continue(()));
        };

        for (value, (a, b, threshold)) in parameters.into_iter().zip(PAIR_TWISTS) {
            if value == 0 {
                continue;
            }
            let mut alg = self.corner_pair_twist(a, b)?;
            if value == threshold {
                alg = Move::invert(&alg);
            }
            self.execute(&alg)?;
        }

        Ok(ControlFlow::Continue(()))
    }
}
