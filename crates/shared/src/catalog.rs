use crate::models::{Building, Rect};

/// Fixed table of quizzable campus buildings.
///
/// Built once at startup and never mutated; calibration mode only logs
/// click coordinates, it does not write them back here. Bounds were
/// determined by hand with calibration mode against the map image.
#[derive(Debug, Clone)]
pub struct BuildingCatalog {
    buildings: Vec<Building>,
}

impl BuildingCatalog {
    /// The CSUN campus data set.
    pub fn campus() -> Self {
        let entry = |name: &str, code: &str, grid: &str, bounds: Option<Rect>| Building {
            name: name.to_string(),
            code: code.to_string(),
            grid_label: grid.to_string(),
            bounds,
        };
        Self {
            buildings: vec![
                entry(
                    "Bayramian Hall",
                    "BH",
                    "C4",
                    Some(Rect::from_row_col((530.0, 308.0), (589.0, 400.0))),
                ),
                entry(
                    "Oviatt Library",
                    "OV",
                    "D4",
                    Some(Rect::from_row_col((498.0, 422.0), (555.0, 528.0))),
                ),
                entry(
                    "Student Union (USU)",
                    "USU",
                    "F4",
                    Some(Rect::from_row_col((501.0, 730.0), (545.0, 791.0))),
                ),
                entry(
                    "Jacaranda Hall",
                    "JA",
                    "E5",
                    Some(Rect::from_row_col((624.0, 474.0), (716.0, 590.0))),
                ),
                entry(
                    "Sierra Hall",
                    "SH",
                    "C3",
                    Some(Rect::from_row_col((343.0, 311.0), (376.0, 415.0))),
                ),
            ],
        }
    }

    pub fn from_buildings(buildings: Vec<Building>) -> Self {
        Self { buildings }
    }

    /// Look a building up by its unique name. The question list is drawn
    /// from the catalog, so a miss means a broken question table.
    pub fn lookup(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// The fixed question sequence, one round per building.
    pub fn question_order(&self) -> Vec<String> {
        [
            "Bayramian Hall",
            "Oviatt Library",
            "Student Union (USU)",
            "Jacaranda Hall",
            "Sierra Hall",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_campus_has_five_buildings() {
        let catalog = BuildingCatalog::campus();
        assert_eq!(catalog.buildings().len(), 5);
    }

    #[test]
    fn test_lookup_known_building() {
        let catalog = BuildingCatalog::campus();
        let b = catalog.lookup("Oviatt Library").unwrap();
        assert_eq!(b.code, "OV");
        assert_eq!(b.grid_label, "D4");
        assert!(b.bounds.is_some());
    }

    #[test]
    fn test_lookup_unknown_building() {
        let catalog = BuildingCatalog::campus();
        assert!(catalog.lookup("Chaparral Hall").is_none());
    }

    #[test]
    fn test_question_order_is_covered_by_catalog() {
        let catalog = BuildingCatalog::campus();
        let questions = catalog.question_order();
        assert_eq!(questions.len(), 5);
        for name in &questions {
            assert!(catalog.lookup(name).is_some(), "missing: {name}");
        }
    }

    #[test]
    fn test_bayramian_bounds_row_col_orientation() {
        // Guards the (row, col) -> (x, y) translation of the source data:
        // the grid-C4 building sits west of Oviatt Library.
        let catalog = BuildingCatalog::campus();
        let bh = catalog.lookup("Bayramian Hall").unwrap().bounds.unwrap();
        assert!(bh.contains(Point::new(350.0, 560.0)));
        assert!(!bh.contains(Point::new(560.0, 350.0)));
    }
}
