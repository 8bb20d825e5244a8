//! Module placement for compact and full symbols
//!
//! Data layers are addressed through an alignment map that skips the
//! reference grid lines, so layer arithmetic can work on the grid-free
//! `base_size` square. Each layer is two modules thick and is filled side by
//! side (left, bottom, right, top), two bits per step across the layer.
//! The message stream starts in the outermost layer; read backwards, it
//! walks the rings from the innermost layer outward.

use super::bitbuffer::BitBuffer;
use super::function_mask::{FunctionMask, ModuleRole};
use crate::models::{BitMatrix, SymbolSpec};

/// One data bit position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Matrix row
    pub row: usize,
    /// Matrix column
    pub col: usize,
    /// Index into the message bit stream
    pub bit_index: usize,
}

/// Geometry of one symbol size
#[derive(Debug, Clone)]
pub struct GridLayout {
    spec: SymbolSpec,
    size: usize,
    base_size: usize,
    alignment: Vec<usize>,
    mask: FunctionMask,
}

impl GridLayout {
    /// Geometry for `spec`
    pub fn new(spec: SymbolSpec) -> Self {
        let size = spec.size();
        let base_size = spec.base_size();
        let alignment = if spec.is_compact() {
            (0..base_size).collect()
        } else {
            let mut map = vec![0; base_size];
            let orig_center = base_size / 2;
            let center = size / 2;
            for i in 0..orig_center {
                let offset = i + i / 15;
                map[orig_center - i - 1] = center - offset - 1;
                map[orig_center + i] = center + offset + 1;
            }
            map
        };
        Self {
            spec,
            size,
            base_size,
            alignment,
            mask: FunctionMask::new(spec),
        }
    }

    /// Symbol this layout places
    pub fn spec(&self) -> SymbolSpec {
        self.spec
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module roles of this symbol
    pub fn mask(&self) -> &FunctionMask {
        &self.mask
    }

    /// Number of data bits the layers hold
    pub fn capacity(&self) -> usize {
        self.spec.capacity_bits()
    }

    /// Modules along one side of layer `layer` (0 = outermost), per bit row
    fn row_size(&self, layer: usize) -> usize {
        let core = if self.spec.is_compact() { 9 } else { 12 };
        (self.spec.layers() as usize - layer) * 4 + core
    }

    /// Position of message bit `bit_index`
    pub fn placement(&self, bit_index: usize) -> Placement {
        debug_assert!(bit_index < self.capacity());
        let mut layer = 0;
        let mut local = bit_index;
        let mut row_size = self.row_size(0);
        while local >= row_size * 8 {
            local -= row_size * 8;
            layer += 1;
            row_size = self.row_size(layer);
        }

        let side = local / (row_size * 2);
        let step = local % (row_size * 2);
        let (j, k) = (step / 2, step % 2);
        let a = &self.alignment;
        let last = self.base_size - 1;
        let near = 2 * layer;

        let (col, row) = match side {
            0 => (a[near + k], a[near + j]),
            1 => (a[near + j], a[last - near - k]),
            2 => (a[last - near - k], a[last - near - j]),
            _ => (a[last - near - j], a[near + k]),
        };
        Placement {
            row,
            col,
            bit_index,
        }
    }

    /// All data positions in message order
    pub fn positions(&self) -> DataPositions<'_> {
        DataPositions {
            layout: self,
            front: 0,
            back: self.capacity(),
        }
    }

    /// Draw the complete symbol: data layers, mode message, bull's eye,
    /// orientation marks and (full symbols) the reference grid.
    ///
    /// Panics if a data or mode message bit would land on a module the
    /// mask reserves for another role.
    pub fn render(&self, message: &BitBuffer, mode_message: &BitBuffer) -> BitMatrix {
        assert_eq!(message.len(), self.capacity(), "message must fill the data layers");
        assert_eq!(mode_message.len(), self.spec.form().mode_message_bits());

        let mut matrix = BitMatrix::square(self.size);
        for p in self.positions() {
            assert_eq!(
                self.mask.role(p.col, p.row),
                ModuleRole::Data,
                "data bit {} placed on a reserved module",
                p.bit_index
            );
            if message.get(p.bit_index) {
                matrix.set(p.col, p.row, true);
            }
        }
        self.draw_mode_message(&mut matrix, mode_message);
        self.draw_bulls_eye(&mut matrix);
        if !self.spec.is_compact() {
            self.draw_reference_grid(&mut matrix);
        }
        matrix
    }

    fn draw_mode_message(&self, matrix: &mut BitMatrix, bits: &BitBuffer) {
        let c = self.size / 2;
        let r = self.spec.form().core_radius();
        // Bits per side; full symbols skip the centre line in the middle
        let per_side = bits.len() / 4;
        for i in 0..per_side {
            let offset = if self.spec.is_compact() {
                c - 3 + i
            } else {
                c - 5 + i + i / 5
            };
            let mirrored = 2 * c - offset;
            debug_assert_eq!(self.mask.role(offset, c - r), ModuleRole::ModeMessage);
            debug_assert_eq!(self.mask.role(c - r, mirrored), ModuleRole::ModeMessage);
            matrix.set(offset, c - r, bits.get(i));
            matrix.set(c + r, offset, bits.get(i + per_side));
            matrix.set(mirrored, c + r, bits.get(i + 2 * per_side));
            matrix.set(c - r, mirrored, bits.get(i + 3 * per_side));
        }
    }

    fn draw_bulls_eye(&self, matrix: &mut BitMatrix) {
        let c = self.size / 2;
        let r = self.spec.form().core_radius();
        for ring in (0..r).step_by(2) {
            for j in c - ring..=c + ring {
                matrix.set(j, c - ring, true);
                matrix.set(j, c + ring, true);
                matrix.set(c - ring, j, true);
                matrix.set(c + ring, j, true);
            }
        }
        // Orientation: 3 dark at top-left, 2 at top-right, 1 at bottom-right
        matrix.set(c - r, c - r, true);
        matrix.set(c - r + 1, c - r, true);
        matrix.set(c - r, c - r + 1, true);
        matrix.set(c + r, c - r, true);
        matrix.set(c + r, c - r + 1, true);
        matrix.set(c + r, c + r - 1, true);
    }

    fn draw_reference_grid(&self, matrix: &mut BitMatrix) {
        let c = self.size / 2;
        for line in (0..=c).step_by(16) {
            for k in (c % 2..self.size).step_by(2) {
                matrix.set(c - line, k, true);
                matrix.set(c + line, k, true);
                matrix.set(k, c - line, true);
                matrix.set(k, c + line, true);
            }
        }
    }
}

/// Iterator over [`Placement`]s in message bit order
pub struct DataPositions<'a> {
    layout: &'a GridLayout,
    front: usize,
    back: usize,
}

impl Iterator for DataPositions<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.front >= self.back {
            return None;
        }
        let p = self.layout.placement(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for DataPositions<'_> {
    fn next_back(&mut self) -> Option<Placement> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.layout.placement(self.back))
    }
}

impl ExactSizeIterator for DataPositions<'_> {}
