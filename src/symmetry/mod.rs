//! Symmetries of the square board.
//!
//! The dihedral group of the square is generated by a quarter rotation and a
//! reflection across the main diagonal. Enumerating the four rotations of a
//! position and the reflection of each yields the (up to) eight encodings of
//! positions that play identically. Hashing those encodings lets callers
//! recognise a position they have already seen in another orientation.
//!
//! Cells are indexed row-major (`row * width + col`). A transform `f` moves
//! the contents of cell `i` to cell `f(i)`; player locations, stored as cell
//! indices, go through the same `f`, so they always point at the cell the
//! player occupies. Reflecting twice or rotating four times reproduces the
//! original encoding exactly.
//!
//! The hashes are fingerprints: distinct positions may collide. Treat a match
//! as "probably the same position", never as proof.

use std::hash::{Hash, Hasher};

use log::trace;
use rustc_hash::{FxHashSet, FxHasher};
use thiserror::Error;

use crate::alpha_beta_searcher::BoardView;
use crate::board::{BoardEncoding, BoardError, Cell, Move, MoveList};


#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymmetryError {
    #[error("position carries no board width, its symmetries are undefined")]
    MissingGeometry,
}

/// Reflection across the main diagonal: `(row, col) -> (col, row)`.
#[inline]
pub fn reflect_diagonal_index(index: usize, width: usize) -> usize {
    (index % width) * width + index / width
}

/// Quarter turn: `(row, col) -> (width - 1 - col, row)`.
#[inline]
pub fn rotate_index(index: usize, width: usize) -> usize {
    (width - 1 - index % width) * width + index / width
}

/// Width of an encoding that has usable geometry. A zero width carries no
/// more geometry than a missing one.
fn geometry_width(encoding: &BoardEncoding) -> Option<usize> {
    encoding.width.filter(|&width| width > 0)
}

/// Applies an index transform to a square encoding. Returns `None` when the
/// encoding has no width or is not square.
pub fn transform_encoding<F>(encoding: &BoardEncoding, transform: F) -> Option<BoardEncoding>
where
    F: Fn(usize, usize) -> usize,
{
    let width = geometry_width(encoding)?;
    if !encoding.is_square() {
        return None;
    }
    Some(transform_square(encoding, width, transform))
}

pub fn reflect_diagonal(encoding: &BoardEncoding) -> Option<BoardEncoding> {
    transform_encoding(encoding, reflect_diagonal_index)
}

pub fn rotate_quarter(encoding: &BoardEncoding) -> Option<BoardEncoding> {
    transform_encoding(encoding, rotate_index)
}

fn transform_square<F>(encoding: &BoardEncoding, width: usize, transform: F) -> BoardEncoding
where
    F: Fn(usize, usize) -> usize,
{
    let mut cells = vec![Cell::Empty; encoding.cells.len()];
    for (index, &cell) in encoding.cells.iter().enumerate() {
        cells[transform(index, width)] = cell;
    }

    BoardEncoding {
        width: Some(width),
        cells,
        locations: [
            transform(encoding.locations[0], width),
            transform(encoding.locations[1], width),
        ],
        active_player: encoding.active_player,
    }
}

pub fn hash_encoding(encoding: &BoardEncoding) -> u64 {
    let mut hasher = FxHasher::default();
    encoding.hash(&mut hasher);
    hasher.finish()
}

/// Hashes of the symmetric variants of `encoding`, in the order
/// `R0, D(R0), R1, D(R1), R2, D(R2), R3, D(R3)` where `Rk` is `k` quarter
/// turns and `D` the diagonal reflection.
///
/// Without a (non-zero) width there is nothing to transform and the result
/// is empty. Rectangular boards only have the identity hash.
pub fn encoding_hashes(encoding: &BoardEncoding) -> Vec<u64> {
    let width = match geometry_width(encoding) {
        Some(width) => width,
        None => return Vec::new(),
    };
    if !encoding.is_square() {
        return vec![hash_encoding(encoding)];
    }

    let mut hashes = Vec::with_capacity(8);
    let mut rotated = encoding.clone();
    for quarter_turns in 0..4 {
        if quarter_turns > 0 {
            rotated = transform_square(&rotated, width, rotate_index);
        }
        hashes.push(hash_encoding(&rotated));
        hashes.push(hash_encoding(&transform_square(
            &rotated,
            width,
            reflect_diagonal_index,
        )));
    }
    hashes
}

pub fn symmetry_hashes<B: BoardView>(position: &B) -> Vec<u64> {
    encoding_hashes(&position.encoding())
}

/// The smallest of the symmetry hashes; equal for every orientation of the
/// same position.
pub fn canonical_hash<B: BoardView>(position: &B) -> Result<u64, SymmetryError> {
    symmetry_hashes(position)
        .into_iter()
        .min()
        .ok_or(SymmetryError::MissingGeometry)
}

/// Filters `moves` down to those whose successor is not a symmetric duplicate
/// of an earlier successor. Surviving moves keep their relative order.
///
/// Fails with `BoardError::MissingGeometryError` when a successor has no
/// board width to transform.
pub fn distinct_successor_moves<B: BoardView>(
    position: &B,
    moves: &[Move],
) -> Result<MoveList, BoardError> {
    let mut seen = FxHashSet::default();
    let mut distinct = MoveList::new();

    for &mv in moves {
        let successor = position.forecast_move(mv)?;
        let hashes = symmetry_hashes(&successor);
        if hashes.is_empty() {
            return Err(BoardError::MissingGeometryError);
        }
        if hashes.iter().any(|hash| seen.contains(hash)) {
            trace!("skipping {}, symmetric to an earlier move", mv);
            continue;
        }
        seen.extend(hashes);
        distinct.push(mv);
    }

    Ok(distinct)
}
