use std::ops::ControlFlow;

use cube_core::{FaceId, Location, Move};
use itertools::Itertools;

use super::{PhaseResult, RING, Solver3x3, ring_next};
use crate::{SolverError, Unsolvable};

use FaceId::{D, U};

/// The two stickers of a corner that are not on `exclude`, ordered so that the
/// second sits one step further along the ring than the first.
fn ring_pair(locations: &[Location], exclude: FaceId) -> Option<(Location, Location)> {
    let (a, b) = locations
        .iter()
        .copied()
        .filter(|l| l.face != exclude)
        .collect_tuple()?;
    Some(if ring_next(a.face) == b.face {
        (a, b)
    } else {
        (b, a)
    })
}

impl Solver3x3<'_> {
    /// Swaps the top corner between `a` and `b` with the bottom corner below it.
    fn corner_commutator(&self, a: FaceId, b: FaceId) -> Result<Vec<Move>, SolverError> {
        let down = self.rotate_until(a, self.position(b, &[U, a])?, D)?;
        let side = self.rotate_until(D, self.position(a, &[D, b])?, b)?;
        Ok([
            down.clone(),
            side.clone(),
            Move::invert(&down),
            Move::invert(&side),
        ]
        .concat())
    }

    /// Exchanges the middle edge between `a` and `o` with the bottom edge under `a`.
    fn edge_insert(&self, a: FaceId, o: FaceId) -> Result<Vec<Move>, SolverError> {
        let away = self.rotate_until(D, self.position(a, &[D])?, o.opposite())?;
        let lift_o = self.rotate_until(o, self.position(a, &[o])?, D)?;
        let lift_a = self.rotate_until(a, self.position(o, &[a])?, D)?;
        let back = Move::invert(&away);
        Ok([
            away.clone(),
            lift_o.clone(),
            back.clone(),
            Move::invert(&lift_o),
            back,
            lift_a.clone(),
            away,
            Move::invert(&lift_a),
        ]
        .concat())
    }

    pub(super) fn cross(&mut self) -> PhaseResult {
        let up = self.face_colors[U];
        for target in RING {
            let colors = [up, self.face_colors[target]];
            let [on_up, on_side] = self.locate(colors)?;
            if on_up.face == U && on_side.face == target {
                continue;
            }

            // Drop the edge into the bottom layer
            if on_up.face == U || on_side.face == U {
                let ring_face = if on_up.face == U {
                    on_side.face
                } else {
                    on_up.face
                };
                let turn = self.turn(ring_face, true)?;
                self.execute(&[turn, turn])?;
            } else if on_up.face != D && on_side.face != D {
                let down = self.rotate_until(on_side.face, on_up, D)?;
                let park = self.turn(D, true)?;
                self.execute(&down)?;
                self.execute(&[park])?;
                self.execute(&Move::invert(&down))?;
            }

            let [on_up, on_side] = self.locate(colors)?;
            if on_up.face == D {
                let align = self.rotate_until(D, on_side, target)?;
                self.execute(&align)?;
                let turn = self.turn(target, true)?;
                self.execute(&[turn, turn])?;
            } else {
                let next = ring_next(target);
                let align = self.rotate_until(D, on_up, next)?;
                self.execute(&align)?;

                let [_, on_side] = self.locate(colors)?;
                let lift = self.rotate_until(next, on_side, target)?;
                self.execute(&lift)?;

                let [on_up, _] = self.locate(colors)?;
                let insert = self.rotate_until(target, on_up, U)?;
                self.execute(&insert)?;
                self.execute(&Move::invert(&lift))?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    pub(super) fn upper_corners(&mut self) -> PhaseResult {
        for first in RING {
            let second = ring_next(first);
            let colors = [
                self.face_colors[U],
                self.face_colors[first],
                self.face_colors[second],
            ];
            let home = [U, first, second];
            let mut placed = false;

            for _ in 0..3 {
                let locations = self.locate(colors)?;
                if locations.map(|l| l.face) == home {
                    placed = true;
                    break;
                }

                if locations.iter().any(|l| l.face == U) {
                    // Wrong top slot, push it down
                    let Some((a, b)) = ring_pair(&locations, U) else {
                        return Ok(ControlFlow::Break(Unsolvable::InconsistentStickers));
                    };
                    let alg = self.corner_commutator(a.face, b.face)?;
                    self.execute(&alg)?;
                    continue;
                }

                let Some((a, _)) = ring_pair(&locations, D) else {
                    return Ok(ControlFlow::Break(Unsolvable::InconsistentStickers));
                };
                let align = self.rotate_until(D, a, first)?;
                self.execute(&align)?;
                for _ in 0..6 {
                    let alg = self.corner_commutator(first, second)?;
                    self.execute(&alg)?;
                    if self.locate(colors)?.map(|l| l.face) == home {
                        placed = true;
                        break;
                    }
                }
                break;
            }

            if !placed {
                return Ok(ControlFlow::Break(Unsolvable::UnplaceablePiece));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    pub(super) fn middle_edges(&mut self) -> PhaseResult {
        for a in RING {
            let b = ring_next(a);
            let colors = [self.face_colors[a], self.face_colors[b]];
            let mut placed = false;

            for _ in 0..3 {
                let [on_a, on_b] = self.locate(colors)?;
                if on_a.face == a && on_b.face == b {
                    placed = true;
                    break;
                }
                if on_a.face == U || on_b.face == U {
                    return Ok(ControlFlow::Break(Unsolvable::InconsistentStickers));
                }

                if on_a.face != D && on_b.face != D {
                    let alg = self.edge_insert(on_a.face, on_b.face)?;
                    self.execute(&alg)?;
                    continue;
                }

                let side = if on_a.face == D { on_b } else { on_a };
                let Some(&home) = self.color_faces.get(&self.color(side)?) else {
                    return Ok(ControlFlow::Break(Unsolvable::InconsistentStickers));
                };
                let other = if home == a { b } else { a };
                let align = self.rotate_until(D, side, home)?;
                self.execute(&align)?;
                let alg = self.edge_insert(home, other)?;
                self.execute(&alg)?;
            }

            if !placed {
                let [on_a, on_b] = self.locate(colors)?;
                placed = on_a.face == a && on_b.face == b;
            }
            if !placed {
                return Ok(ControlFlow::Break(Unsolvable::UnplaceablePiece));
            }
        }

        Ok(ControlFlow::Continue(()))
    }
}
