//! Natural classes and the exclusivity check.
//!
//! A [`Partition`] groups the natural classes produced by one dividing
//! principle: the sonority hierarchy splits every segment into vowels,
//! glides, liquids, nasals and obstruents; the obstruent partition splits
//! obstruents into stops, affricates and fricatives, and so on. A partition
//! may be gated by a condition (the obstruent partition only speaks about
//! obstruents), and may require that every segment the gate admits belongs
//! to exactly one of its classes.
//!
//! Gating is expressed through [`Membership::NotApplicable`] and
//! [`Verdict::Skipped`] rather than through the error channel: only a real
//! exclusivity violation produces [`SegmentalError::Exclusivity`].
//!
//! The standard partitions are registered once by
//! [`PartitionRegistry::standard`] and shared through [`PARTITIONS`].

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::errors::{SegmentalError, SegmentalResult};
use crate::segment::{classes, Segment};

/// A predicate over segments.
pub type Predicate = fn(&Segment) -> bool;

/// The standard partitions, built on first use and read-only afterwards.
pub static PARTITIONS: Lazy<PartitionRegistry> = Lazy::new(PartitionRegistry::standard);

/// Tri-state answer to "does this segment belong to this class?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Member,
    NotMember,
    /// The partition's gate does not admit the segment.
    NotApplicable,
}

impl Membership {
    pub fn is_member(self) -> bool {
        self == Membership::Member
    }
}

/// Outcome of a successful exclusivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The gate does not admit the segment; nothing was checked.
    Skipped,
    /// The segment's base is on the partition's exemption list.
    Exempt,
    /// The partition does not require exclusivity.
    Unchecked,
    /// Exactly one class holds.
    Exclusive(&'static str),
}

/// A named class and the predicate deciding membership, before gating.
#[derive(Clone, Copy)]
pub struct NaturalClass {
    name: &'static str,
    test: Predicate,
}

impl NaturalClass {
    pub fn new(name: &'static str, test: Predicate) -> Self {
        Self { name, test }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the predicate without consulting the partition's gate.
    pub fn test(&self, segment: &Segment) -> bool {
        (self.test)(segment)
    }
}

impl fmt::Debug for NaturalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NaturalClass").field(&self.name).finish()
    }
}

/// A set of natural classes sharing one dividing principle.
#[derive(Clone)]
pub struct Partition {
    name: &'static str,
    condition: Option<Predicate>,
    classes: Vec<NaturalClass>,
    exclusive: bool,
    exempt: &'static [&'static str],
}

impl Partition {
    /// A partition whose classes must be mutually exclusive.
    pub fn exclusive(name: &'static str) -> Self {
        Self {
            name,
            condition: None,
            classes: Vec::new(),
            exclusive: true,
            exempt: &[],
        }
    }

    /// A partition whose classes may overlap or all fail.
    pub fn open(name: &'static str) -> Self {
        Self {
            exclusive: false,
            ..Self::exclusive(name)
        }
    }

    /// Only segments satisfying `condition` are classified.
    pub fn gated(mut self, condition: Predicate) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn class(mut self, name: &'static str, test: Predicate) -> Self {
        self.classes.push(NaturalClass::new(name, test));
        self
    }

    /// Base symbols excused from the exclusivity check.
    pub fn exempting(mut self, bases: &'static [&'static str]) -> Self {
        self.exempt = bases;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    pub fn classes(&self) -> &[NaturalClass] {
        &self.classes
    }

    pub fn exempt_bases(&self) -> &'static [&'static str] {
        self.exempt
    }

    /// Whether the gate admits the segment.
    pub fn applies_to(&self, segment: &Segment) -> bool {
        self.condition.map_or(true, |condition| condition(segment))
    }

    pub fn membership(&self, segment: &Segment, class: &NaturalClass) -> Membership {
        if !self.applies_to(segment) {
            Membership::NotApplicable
        } else if class.test(segment) {
            Membership::Member
        } else {
            Membership::NotMember
        }
    }

    /// Names of the classes whose predicate holds, ignoring the gate.
    pub fn members_of(&self, segment: &Segment) -> Vec<&'static str> {
        self.classes
            .iter()
            .filter(|class| class.test(segment))
            .map(|class| class.name)
            .collect()
    }

    /// Require exactly one class to hold when the gate admits the segment.
    pub fn check_exclusivity(&self, segment: &Segment) -> SegmentalResult<Verdict> {
        if !self.exclusive {
            return Ok(Verdict::Unchecked);
        }
        if !self.applies_to(segment) {
            return Ok(Verdict::Skipped);
        }
        if self.exempt.iter().any(|&base| base == segment.base()) {
            return Ok(Verdict::Exempt);
        }

        let members = self.members_of(segment);
        match members.as_slice() {
            [only] => Ok(Verdict::Exclusive(*only)),
            _ => Err(SegmentalError::Exclusivity {
                partition: self.name,
                segment: segment.surface().to_string(),
                members,
            }),
        }
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("name", &self.name)
            .field("gated", &self.condition.is_some())
            .field("classes", &self.classes)
            .field("exclusive", &self.exclusive)
            .field("exempt", &self.exempt)
            .finish()
    }
}

/// Partitions keyed by name, with a class-name index across all of them.
#[derive(Debug, Clone, Default)]
pub struct PartitionRegistry {
    partitions: Vec<Partition>,
    by_name: HashMap<&'static str, usize>,
    by_class: HashMap<&'static str, (usize, usize)>,
}

impl PartitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a partition. A partition or class name registered earlier is
    /// shadowed by the new one.
    pub fn register(&mut self, partition: Partition) -> &mut Self {
        let idx = self.partitions.len();
        self.by_name.insert(partition.name, idx);
        for (class_idx, class) in partition.classes.iter().enumerate() {
            self.by_class.insert(class.name, (idx, class_idx));
        }
        self.partitions.push(partition);
        self
    }

    /// The partitions every segment is classified by.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .register(
                Partition::exclusive("sonority")
                    .class("vowel", classes::vowel)
                    .class("glide", classes::glide)
                    .class("liquid", classes::liquid)
                    .class("nasal", classes::nasal)
                    .class("obstruent", classes::obstruent)
                    .exempting(classes::SONORITY_EXEMPT),
            )
            .register(
                Partition::exclusive("obstruent")
                    .gated(classes::obstruent)
                    .class("stop", classes::stop)
                    .class("affricate", classes::affricate)
                    .class("fricative", classes::fricative),
            )
            .register(
                Partition::open("liquid")
                    .gated(classes::liquid)
                    .class("trill", classes::trill)
                    .class("tap", classes::tap),
            )
            .register(
                Partition::exclusive("backness")
                    .gated(classes::vowel)
                    .class("front", classes::front)
                    .class("central", classes::central)
                    .class("back", classes::back),
            )
            .register(
                Partition::exclusive("height")
                    .gated(classes::vowel)
                    .class("upper_high", classes::upper_high)
                    .class("lower_high", classes::lower_high)
                    .class("upper_mid", classes::upper_mid)
                    .class("lower_mid", classes::lower_mid)
                    .class("low", classes::low),
            )
            .register(
                Partition::open("vowel_quality")
                    .gated(classes::vowel)
                    .class("round", classes::round)
                    .class("nasalized", classes::nasalized),
            )
            .register(
                Partition::exclusive("duration")
                    .class("short", classes::short)
                    .class("long", classes::long)
                    .class("overlong", classes::overlong),
            )
            .register(
                Partition::open("place")
                    .class("labial", classes::labial)
                    .class("coronal", classes::coronal)
                    .class("dorsal", classes::dorsal),
            )
            .register(
                Partition::exclusive("coronal")
                    .gated(classes::coronal)
                    .class("lamino_dental", classes::lamino_dental)
                    .class("apico_alveolar", classes::apico_alveolar)
                    .class("palato_alveolar", classes::palato_alveolar)
                    .class("retroflex", classes::retroflex),
            )
            .register(
                Partition::open("dorsal_consonant")
                    .gated(classes::dorsal_consonant)
                    .class("fronted_velar", classes::fronted_velar)
                    .class("central_velar", classes::central_velar)
                    .class("back_velar", classes::back_velar)
                    .class("uvular", classes::uvular)
                    .class("pharyngeal", classes::pharyngeal),
            )
            .register(
                Partition::exclusive("glottal_width")
                    .class("spread_glottis", classes::spread_glottis)
                    .class("constricted_glottis", classes::constricted_glottis)
                    .class("normal_glottis", classes::normal_glottis),
            );
        registry
    }

    pub fn partition(&self, name: &str) -> Option<&Partition> {
        self.by_name.get(name).map(|&idx| &self.partitions[idx])
    }

    /// Look up a class by name, together with the partition owning it.
    pub fn class(&self, name: &str) -> SegmentalResult<(&Partition, &NaturalClass)> {
        let &(partition_idx, class_idx) =
            self.by_class
                .get(name)
                .ok_or_else(|| SegmentalError::UnknownNaturalClass {
                    name: name.to_string(),
                })?;
        let partition = &self.partitions[partition_idx];
        Ok((partition, &partition.classes[class_idx]))
    }

    /// Gated membership of `segment` in the class called `name`.
    pub fn classify(&self, segment: &Segment, name: &str) -> SegmentalResult<Membership> {
        let (partition, class) = self.class(name)?;
        Ok(partition.membership(segment, class))
    }

    /// Run every exclusivity check, stopping at the first failure.
    pub fn verify(&self, segment: &Segment) -> SegmentalResult<()> {
        for partition in &self.partitions {
            partition.check_exclusivity(segment)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    /// Every registered class name, in registration order.
    pub fn class_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.partitions
            .iter()
            .flat_map(|partition| partition.classes.iter().map(|class| class.name))
    }
}
