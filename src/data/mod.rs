/// Data layer: fixed-width tables, loading, and band selection.
///
/// Architecture:
/// ```text
///  *_radiationField_J.dat      *_radiationField_wavelengths.dat
///        │                               │
///        ▼                               ▼
///   ┌──────────┐                    ┌──────────┐
///   │  loader   │  parse → Table<11> │  loader   │  parse → Table<4>
///   └──────────┘                    └──────────┘
///        │                               │
///        │                               ▼
///        │                          ┌──────────┐
///        │                          │   band    │  λ limits → (wavelength, column)
///        │                          └──────────┘
///        ▼                               │
///   EmissivityTable  ◄───────────────────┘  consumed per cell by `habing`
/// ```

pub mod band;
pub mod loader;
pub mod model;
