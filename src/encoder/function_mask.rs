use crate::models::SymbolSpec;

/// What a module of an Aztec symbol is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleRole {
    /// Data or check codeword bit
    Data,
    /// Bull's eye rings around the centre
    Finder,
    /// Corner marks of the mode message ring
    Orientation,
    /// Mode message bit
    ModeMessage,
    /// Reference grid line (full symbols only)
    Reference,
}

/// Role of every module for a specific symbol size.
#[derive(Debug, Clone)]
pub struct FunctionMask {
    roles: Vec<ModuleRole>,
    spec: SymbolSpec,
    size: usize,
}

impl FunctionMask {
    /// Classify every module of `spec`
    pub fn new(spec: SymbolSpec) -> Self {
        let size = spec.size();
        let center = size / 2;
        let radius = spec.form().core_radius();
        let compact = spec.is_compact();

        let mut roles = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                let dx = x.abs_diff(center);
                let dy = y.abs_diff(center);
                let ring = dx.max(dy);
                let on_grid = !compact && (dx % 16 == 0 || dy % 16 == 0);

                let role = if ring < radius {
                    ModuleRole::Finder
                } else if ring == radius {
                    if dx.min(dy) >= radius - 1 {
                        ModuleRole::Orientation
                    } else if on_grid {
                        ModuleRole::Reference
                    } else {
                        ModuleRole::ModeMessage
                    }
                } else if on_grid {
                    ModuleRole::Reference
                } else {
                    ModuleRole::Data
                };
                roles.push(role);
            }
        }

        Self { roles, spec, size }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Symbol the mask was built for
    pub fn spec(&self) -> SymbolSpec {
        self.spec
    }

    /// Role of the module at column `x`, row `y`
    pub fn role(&self, x: usize, y: usize) -> ModuleRole {
        self.roles[y * self.size + x]
    }

    /// Whether the module carries no data
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.role(x, y) != ModuleRole::Data
    }

    /// Number of data modules
    pub fn data_modules_count(&self) -> usize {
        self.count(ModuleRole::Data)
    }

    /// Number of modules with the given role
    pub fn count(&self, role: ModuleRole) -> usize {
        self.roles.iter().filter(|&&r| r == role).count()
    }
}
