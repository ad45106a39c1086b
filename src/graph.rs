use std::collections::{HashMap, HashSet, LinkedList};

use crate::input::BuildingRecord;

pub type BuildingId = u16;

#[derive(Debug)]
pub struct TunnelGraph {
    tunnel_map: HashMap<BuildingId, HashSet<BuildingId>>,
}

impl TunnelGraph {
    pub fn new(buildings: &[BuildingRecord]) -> Self {
        let mut tunnel_map = HashMap::new();
        for record in buildings {
            tunnel_map
                .entry(record.id())
                .or_insert_with(|| HashSet::new());
            for neighbor in record.neighbors().iter().copied() {
                if neighbor == record.id() {
                    continue;
                }

                tunnel_map
                    .entry(record.id())
                    .or_insert_with(|| HashSet::new())
                    .insert(neighbor);
                tunnel_map
                    .entry(neighbor)
                    .or_insert_with(|| HashSet::new())
                    .insert(record.id());
            }
        }

        Self { tunnel_map }
    }

    pub fn building_n(&self) -> usize {
        self.tunnel_map.len()
    }

    pub fn neighbors(&self, id: BuildingId) -> Option<&HashSet<BuildingId>> {
        self.tunnel_map.get(&id)
    }

    // One cumulative visited set across the whole list, so every building is
    // flooded at most once no matter how many inspect ids land in its component.
    pub fn sector_count(&self, inspect_ids: &[BuildingId]) -> usize {
        let mut visited = HashSet::new();
        let mut sector_n = 0;
        for id in inspect_ids.iter().copied() {
            if visited.contains(&id) {
                continue;
            }

            sector_n += 1;
            self.flood_sector(id, &mut visited);
        }

        sector_n
    }

    pub fn drives_needed(&self, inspect_ids: &[BuildingId]) -> usize {
        self.sector_count(inspect_ids).saturating_sub(1)
    }

    fn flood_sector(&self, start_id: BuildingId, visited: &mut HashSet<BuildingId>) {
        let mut next_ids = LinkedList::from([start_id]);
        while let Some(cur_id) = next_ids.pop_front() {
            if !visited.insert(cur_id) {
                continue;
            }

            if let Some(neighbors) = self.tunnel_map.get(&cur_id) {
                for neighbor in neighbors.iter().copied() {
                    if !visited.contains(&neighbor) {
                        next_ids.push_back(neighbor);
                    }
                }
            }
        }
    }
}
