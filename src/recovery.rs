//! Stress recovery from quadrature-point output.
//!
//! The recovery pipeline has two stages:
//! 1. A map stage over elements: slice each element's quadrature values,
//!    extrapolate them to the element's nodes, and emit one provisional
//!    sample per (element, node) pair.
//! 2. A reduce-by-key stage: average the per-node samples (a node shared
//!    by several elements receives one vote per incident element) into a
//!    single value per node.
//!
//! Stage 1 runs in parallel over elements with Rayon; stage 2 is a pure
//! reduction with no ordering dependency. No partial field is ever
//! produced: any data-integrity failure aborts the whole extraction.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::element::operator_for;
use crate::error::{Error, Result};
use crate::mesh::{Element, Mesh};
use crate::types::{Point3, QuadratureSample, StressComponent};

/// One element's provisional stress estimate at one of its nodes.
///
/// Several samples may exist for the same node, one per incident element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStressSample {
    /// Node id (1-based).
    pub node: usize,
    /// Nodal coordinates.
    pub coords: Point3,
    /// Estimated stress value.
    pub value: f64,
}

/// Averaged stress at a node, with its coordinates retained for consumers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalStress {
    /// Nodal coordinates.
    pub coords: Point3,
    /// Averaged stress value.
    pub value: f64,
}

/// Recovered nodal field for one stress component.
///
/// Holds exactly one averaged value per node incident to at least one
/// element. Built whole per extraction run and replaced, never patched.
#[derive(Debug, Clone)]
pub struct RecoveredField {
    component: StressComponent,
    values: HashMap<usize, NodalStress>,
}

impl RecoveredField {
    /// The stress component this field holds.
    pub fn component(&self) -> StressComponent {
        self.component
    }

    /// Averaged value at a node, if the node carries one.
    pub fn value(&self, node: usize) -> Option<f64> {
        self.values.get(&node).map(|entry| entry.value)
    }

    /// Full entry (coordinates and value) at a node.
    pub fn get(&self, node: usize) -> Option<&NodalStress> {
        self.values.get(&node)
    }

    /// Number of nodes carrying a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (node id, entry) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &NodalStress)> {
        self.values.iter().map(|(&node, entry)| (node, entry))
    }

    /// Minimum and maximum values, for contour limits and legends.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut entries = self.values.values();
        let first = entries.next()?.value;
        let (mut min, mut max) = (first, first);
        for entry in entries {
            min = min.min(entry.value);
            max = max.max(entry.value);
        }
        Some((min, max))
    }
}

/// Supplies quadrature-point stress samples per component.
///
/// Implementations wrap solver output (e.g. a parsed .dat file) and must
/// deliver, per element, exactly the topology's canonical quadrature-point
/// count, ordered as the solver wrote them.
pub trait QuadratureSource {
    /// Ordered quadrature samples for one stress component.
    fn samples(&self, component: StressComponent) -> Result<Vec<QuadratureSample>>;
}

/// Recovered fields for all three components, handed back to consumers.
#[derive(Debug, Clone)]
pub struct FieldSet {
    fields: [RecoveredField; 3],
}

impl FieldSet {
    /// The recovered field for one component.
    pub fn get(&self, component: StressComponent) -> &RecoveredField {
        let idx = match component {
            StressComponent::S11 => 0,
            StressComponent::S22 => 1,
            StressComponent::S33 => 2,
        };
        &self.fields[idx]
    }
}

/// Extrapolate quadrature stresses to element nodes.
///
/// Elements are processed in ascending element-id order so the emitted
/// sample sequence is deterministic; the final averaged result does not
/// depend on it. Any element whose quadrature-sample count does not match
/// its topology, or that references a node id absent from the mesh, aborts
/// the extraction. A sample referencing an unknown element id does too.
pub fn recover(mesh: &Mesh, samples: &[QuadratureSample]) -> Result<Vec<NodeStressSample>> {
    // Group values by element, preserving the solver's per-element order.
    let mut by_element: HashMap<usize, Vec<f64>> = HashMap::new();
    for sample in samples {
        by_element.entry(sample.element).or_default().push(sample.value);
    }

    let known: HashSet<usize> = mesh.elements().iter().map(|e| e.id).collect();
    if let Some(sample) = samples.iter().find(|s| !known.contains(&s.element)) {
        return Err(Error::UnknownElement {
            element: sample.element,
        });
    }

    let mut elements: Vec<&Element> = mesh.elements().iter().collect();
    elements.sort_by_key(|element| element.id);

    // Per-element transforms are independent; collect preserves element
    // order, so the parallel map stays deterministic.
    let per_element: Vec<Vec<NodeStressSample>> = elements
        .par_iter()
        .map(|element| {
            let expected = element.element_type.n_quadrature_points();
            let values = by_element
                .get(&element.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            if values.len() != expected {
                return Err(Error::QuadratureCount {
                    element: element.id,
                    expected,
                    got: values.len(),
                });
            }

            let nodes = mesh.element_nodes(element)?;
            let estimates = operator_for(element.element_type).extrapolate(values);

            Ok(nodes
                .iter()
                .zip(estimates)
                .map(|(node, value)| NodeStressSample {
                    node: node.id,
                    coords: node.coords,
                    value,
                })
                .collect())
        })
        .collect::<Result<_>>()?;

    Ok(per_element.into_iter().flatten().collect())
}

/// Collapse per-element node samples into one averaged value per node.
///
/// The mean is unweighted: each incident element contributes one vote
/// regardless of its size or shape quality. All samples of a group share
/// the same coordinates by construction, so one representative is kept.
pub fn average(component: StressComponent, samples: &[NodeStressSample]) -> RecoveredField {
    let mut groups: HashMap<usize, (Point3, Vec<f64>)> = HashMap::new();
    for sample in samples {
        groups
            .entry(sample.node)
            .or_insert_with(|| (sample.coords, Vec::new()))
            .1
            .push(sample.value);
    }

    let values = groups
        .into_iter()
        .map(|(node, (coords, mut group))| {
            // Accumulate in a canonical order so the mean is bit-identical
            // under any permutation of the input samples.
            group.sort_by(f64::total_cmp);
            let mean = group.iter().sum::<f64>() / group.len() as f64;
            (node, NodalStress { coords, value: mean })
        })
        .collect();

    RecoveredField { component, values }
}

/// Recover the averaged nodal field for one component.
pub fn recover_field(
    mesh: &Mesh,
    samples: &[QuadratureSample],
    component: StressComponent,
) -> Result<RecoveredField> {
    Ok(average(component, &recover(mesh, samples)?))
}

/// Recover all three components from a quadrature source.
///
/// Any failure aborts the whole extraction; no partial set is exposed.
pub fn recover_all(mesh: &Mesh, source: &dyn QuadratureSource) -> Result<FieldSet> {
    let mut extract = |component: StressComponent| -> Result<RecoveredField> {
        let samples = source.samples(component)?;
        recover_field(mesh, &samples, component)
    };

    Ok(FieldSet {
        fields: [
            extract(StressComponent::S11)?,
            extract(StressComponent::S22)?,
            extract(StressComponent::S33)?,
        ],
    })
}
