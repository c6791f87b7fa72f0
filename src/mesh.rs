//! Mesh data structure for stress recovery.
//!
//! Stores nodal coordinates indexed by 1-based id and element connectivity.
//! Nodes and elements are read once from the solver's mesh output and are
//! immutable thereafter; the recovery pipeline only ever reads them.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::Point3;

/// Supported element topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// 8-node hexahedron, full integration (8 quadrature points).
    Hex8,
    /// 10-node quadratic tetrahedron (4 quadrature points).
    Tet10,
}

impl ElementType {
    /// Number of nodes for this topology.
    pub fn n_nodes(self) -> usize {
        match self {
            ElementType::Hex8 => 8,
            ElementType::Tet10 => 10,
        }
    }

    /// Canonical quadrature-point count for this topology.
    pub fn n_quadrature_points(self) -> usize {
        match self {
            ElementType::Hex8 => 8,
            ElementType::Tet10 => 4,
        }
    }

    /// Decode the mesh provider's stable cell-type code.
    ///
    /// Codes follow the VTK convention: 12 for the 8-node hexahedron,
    /// 24 for the 10-node quadratic tetrahedron.
    pub fn from_cell_type(code: u8) -> Result<Self> {
        match code {
            12 => Ok(ElementType::Hex8),
            24 => Ok(ElementType::Tet10),
            other => Err(Error::UnsupportedCellType(other)),
        }
    }
}

/// A mesh node: 1-based id and coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Node id (1-based, unique within the mesh).
    pub id: usize,
    /// Nodal coordinates.
    pub coords: Point3,
}

/// Element connectivity: topology tag and ordered node ids.
///
/// Node order is topology-defined and semantically significant: it
/// determines which quadrature sample maps to which shape function.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element id (1-based).
    pub id: usize,
    /// Topology tag.
    pub element_type: ElementType,
    /// Ordered node ids (8 or 10 entries).
    pub nodes: Vec<usize>,
}

/// Finite element mesh as consumed by the recovery pipeline.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    nodes: Vec<Node>,
    node_index: HashMap<usize, usize>,
    elements: Vec<Element>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(n_nodes: usize, n_elements: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n_nodes),
            node_index: HashMap::with_capacity(n_nodes),
            elements: Vec::with_capacity(n_elements),
        }
    }

    /// Add a node to the mesh.
    pub fn add_node(&mut self, id: usize, coords: Point3) -> Result<()> {
        if id == 0 {
            return Err(Error::Mesh("node ids are 1-based, got 0".to_string()));
        }
        if self.node_index.contains_key(&id) {
            return Err(Error::Mesh(format!("duplicate node id {}", id)));
        }
        self.node_index.insert(id, self.nodes.len());
        self.nodes.push(Node { id, coords });
        Ok(())
    }

    /// Add an element to the mesh.
    ///
    /// Validates the node count against the topology. Node-id existence is
    /// checked when connectivity is resolved during extraction, so meshes
    /// can be assembled before all nodes have been read.
    pub fn add_element(
        &mut self,
        id: usize,
        element_type: ElementType,
        nodes: Vec<usize>,
    ) -> Result<()> {
        if nodes.len() != element_type.n_nodes() {
            return Err(Error::Mesh(format!(
                "element {}: topology {:?} requires {} nodes, got {}",
                id,
                element_type,
                element_type.n_nodes(),
                nodes.len()
            )));
        }
        self.elements.push(Element {
            id,
            element_type,
            nodes,
        });
        Ok(())
    }

    /// Number of nodes in the mesh.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of elements in the mesh.
    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Look up a node by id.
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.node_index.get(&id).map(|&idx| &self.nodes[idx])
    }

    /// All elements, in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Resolve an element's node records in connectivity order.
    ///
    /// A missing node id is a data-integrity error that aborts the whole
    /// extraction.
    pub fn element_nodes(&self, element: &Element) -> Result<Vec<Node>> {
        element
            .nodes
            .iter()
            .map(|&id| {
                self.node(id).copied().ok_or(Error::MissingNode {
                    element: element.id,
                    node: id,
                })
            })
            .collect()
    }

    /// Compute the mesh bounding box.
    pub fn bounds(&self) -> Option<(Point3, Point3)> {
        if self.nodes.is_empty() {
            return None;
        }

        let mut min = self.nodes[0].coords;
        let mut max = self.nodes[0].coords;

        for node in &self.nodes[1..] {
            for i in 0..3 {
                min[i] = min[i].min(node.coords[i]);
                max[i] = max[i].max(node.coords[i]);
            }
        }

        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn two_node_mesh() -> Mesh {
        let mut mesh = Mesh::with_capacity(2, 1);
        mesh.add_node(1, Vector3::new(0.0, 0.0, 0.0)).unwrap();
        mesh.add_node(2, Vector3::new(1.0, 0.0, 0.0)).unwrap();
        mesh
    }

    #[test]
    fn test_cell_type_codes() {
        assert_eq!(ElementType::from_cell_type(12).unwrap(), ElementType::Hex8);
        assert_eq!(ElementType::from_cell_type(24).unwrap(), ElementType::Tet10);
        assert!(matches!(
            ElementType::from_cell_type(10),
            Err(Error::UnsupportedCellType(10))
        ));
    }

    #[test]
    fn test_topology_counts() {
        assert_eq!(ElementType::Hex8.n_nodes(), 8);
        assert_eq!(ElementType::Hex8.n_quadrature_points(), 8);
        assert_eq!(ElementType::Tet10.n_nodes(), 10);
        assert_eq!(ElementType::Tet10.n_quadrature_points(), 4);
    }

    #[test]
    fn test_node_lookup() {
        let mesh = two_node_mesh();
        assert_eq!(mesh.n_nodes(), 2);
        assert_eq!(mesh.node(2).unwrap().coords, Vector3::new(1.0, 0.0, 0.0));
        assert!(mesh.node(3).is_none());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut mesh = two_node_mesh();
        let result = mesh.add_node(1, Vector3::new(2.0, 0.0, 0.0));
        assert!(matches!(result, Err(Error::Mesh(_))));
    }

    #[test]
    fn test_zero_node_id_rejected() {
        let mut mesh = Mesh::new();
        let result = mesh.add_node(0, Vector3::new(0.0, 0.0, 0.0));
        assert!(matches!(result, Err(Error::Mesh(_))));
    }

    #[test]
    fn test_element_node_count_validated() {
        let mut mesh = two_node_mesh();
        let result = mesh.add_element(1, ElementType::Hex8, vec![1, 2]);
        assert!(matches!(result, Err(Error::Mesh(_))));
    }

    #[test]
    fn test_element_nodes_reports_missing_node() {
        let mut mesh = two_node_mesh();
        mesh.add_element(1, ElementType::Hex8, vec![1, 2, 3, 4, 5, 6, 7, 8])
            .unwrap();
        let result = mesh.element_nodes(&mesh.elements()[0]);
        assert!(matches!(
            result,
            Err(Error::MissingNode { element: 1, node: 3 })
        ));
    }

    #[test]
    fn test_bounds() {
        let mut mesh = Mesh::new();
        mesh.add_node(1, Vector3::new(-1.0, -2.0, -3.0)).unwrap();
        mesh.add_node(2, Vector3::new(1.0, 2.0, 3.0)).unwrap();
        mesh.add_node(3, Vector3::new(0.0, 0.0, 0.0)).unwrap();

        let (min, max) = mesh.bounds().unwrap();
        assert_eq!(min, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, Vector3::new(1.0, 2.0, 3.0));
    }
}
