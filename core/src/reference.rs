use crate::config::{self, ConfigError};
use crate::exercises::Exercise;
use crate::types::JointAngles;

/// Hvor referanseposen kommer fra er kallerens valg (katalog eller analyse
/// av en trenervideo); kjernen ser bare et vinkelsett.
pub trait ReferenceProvider {
    fn reference_angles(&self) -> JointAngles;
}

/// Katalogbasert referanse for en kjent øvelse.
#[derive(Debug, Clone, Copy)]
pub struct CatalogReference(pub Exercise);

impl ReferenceProvider for CatalogReference {
    fn reference_angles(&self) -> JointAngles {
        self.0.reference_angles()
    }
}

/// Fast, kaller-levert referanse (f.eks. ekstrahert fra en trenervideo).
/// Validert ved konstruksjon slik at scoringen forblir total.
#[derive(Debug, Clone, Copy)]
pub struct FixedReference(JointAngles);

impl FixedReference {
    pub fn new(angles: JointAngles) -> Result<Self, ConfigError> {
        config::validate_reference(&angles)?;
        Ok(Self(angles))
    }
}

impl ReferenceProvider for FixedReference {
    fn reference_angles(&self) -> JointAngles {
        self.0
    }
}

/// Fallback-referanse når hverken øvelse eller trenerpose er valgt.
pub fn default_reference() -> JointAngles {
    JointAngles::new(120.0, 145.0, 90.0, 180.0)
}
