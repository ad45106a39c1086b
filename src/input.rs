use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{graph::BuildingId, Error};

const MAX_BUILDING_ID: usize = 999;

static ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").unwrap());
static DEGREE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").unwrap());

#[derive(Debug, Clone)]
pub struct BuildingRecord {
    id: BuildingId,
    neighbors: Vec<BuildingId>,
}

impl BuildingRecord {
    pub fn new(id: BuildingId, neighbors: Vec<BuildingId>) -> Self {
        Self { id, neighbors }
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn neighbors(&self) -> &[BuildingId] {
        &self.neighbors
    }
}

#[derive(Debug)]
pub struct InspectionPlan {
    inspect_ids: Vec<BuildingId>,
    buildings: Vec<BuildingRecord>,
}

impl InspectionPlan {
    pub fn inspect_ids(&self) -> &[BuildingId] {
        &self.inspect_ids
    }

    pub fn buildings(&self) -> &[BuildingRecord] {
        &self.buildings
    }
}

pub fn read_plan<P: AsRef<Path>>(path: P) -> Result<InspectionPlan> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    parse_plan(BufReader::new(file))
}

pub fn parse_plan<R: BufRead>(reader: R) -> Result<InspectionPlan> {
    let mut lines = reader.lines().enumerate();
    let mut next_line = move || -> Result<Option<String>> {
        match lines.next() {
            Some((ind, line)) => {
                let line =
                    line.with_context(|| format!("Failed to read line {} in input.", ind + 1))?;
                Ok(Some(line))
            }
            None => Ok(None),
        }
    };

    let header_line = next_line()?.ok_or(Error::MissingLine(1))?;
    let (building_n, inspect_n) = parse_header(&header_line)?;

    let inspect_line = next_line()?.ok_or(Error::MissingLine(2))?;
    let inspect_ids = parse_inspect_ids(&inspect_line, inspect_n)?;

    let mut buildings = Vec::with_capacity(building_n);
    let mut declared_ids = HashSet::new();
    for line_offset in 0..building_n {
        let building_line = next_line()?.ok_or(Error::MissingLine(line_offset + 3))?;
        let record = parse_building(&building_line)?;
        if !declared_ids.insert(record.id()) {
            return Err(Error::DuplicateBuildingId(record.id()).into());
        }

        buildings.push(record);
    }

    if let Some(trailing) = next_line()? {
        return Err(Error::TrailingContent(trailing).into());
    }

    for id in inspect_ids.iter() {
        if !declared_ids.contains(id) {
            return Err(Error::UndeclaredInspectId(*id).into());
        }
    }

    for record in buildings.iter() {
        for neighbor in record.neighbors() {
            if !declared_ids.contains(neighbor) {
                return Err(Error::UndeclaredNeighbor(record.id(), *neighbor).into());
            }
        }
    }

    Ok(InspectionPlan {
        inspect_ids,
        buildings,
    })
}

fn parse_header(text: &str) -> Result<(usize, usize), Error> {
    let tokens = text.split_ascii_whitespace().collect::<Vec<_>>();
    if tokens.len() != 2 {
        return Err(Error::MalformedHeaderLine(text.to_string()));
    }

    Ok((parse_count(tokens[0])?, parse_count(tokens[1])?))
}

fn parse_inspect_ids(text: &str, inspect_n: usize) -> Result<Vec<BuildingId>, Error> {
    let tokens = text.split_ascii_whitespace().collect::<Vec<_>>();
    if tokens.len() != inspect_n {
        return Err(Error::WrongInspectIdCount(inspect_n, tokens.len()));
    }

    let mut inspect_ids = Vec::with_capacity(inspect_n);
    let mut given_ids = HashSet::new();
    for token in tokens {
        let id = parse_id(token)?;
        if !given_ids.insert(id) {
            return Err(Error::DuplicateInspectId(id));
        }

        inspect_ids.push(id);
    }

    Ok(inspect_ids)
}

fn parse_building(text: &str) -> Result<BuildingRecord, Error> {
    let tokens = text.split_ascii_whitespace().collect::<Vec<_>>();
    if tokens.len() < 2 {
        return Err(Error::MalformedBuildingLine(text.to_string()));
    }

    let id = parse_id(tokens[0])?;
    let degree = parse_degree(tokens[1])?;
    if tokens.len() - 2 != degree {
        return Err(Error::NeighborCountMismatch(id, degree, tokens.len() - 2));
    }

    let mut neighbors = Vec::with_capacity(degree);
    let mut given_neighbors = HashSet::new();
    for token in &tokens[2..] {
        let neighbor = parse_id(token)?;
        if neighbor == id {
            return Err(Error::SelfLinkedBuilding(id));
        }

        if !given_neighbors.insert(neighbor) {
            return Err(Error::DuplicateNeighbor(id, neighbor));
        }

        neighbors.push(neighbor);
    }

    Ok(BuildingRecord::new(id, neighbors))
}

fn parse_count(token: &str) -> Result<usize, Error> {
    if !ID_REGEX.is_match(token) {
        return Err(Error::InvalidCountText(token.to_string()));
    }

    match token.parse::<usize>() {
        Ok(count) if count <= MAX_BUILDING_ID => Ok(count),
        _ => Err(Error::CountOutOfRange(token.to_string())),
    }
}

fn parse_id(token: &str) -> Result<BuildingId, Error> {
    if !ID_REGEX.is_match(token) {
        return Err(Error::InvalidIdText(token.to_string()));
    }

    match token.parse::<usize>() {
        Ok(id) if id <= MAX_BUILDING_ID => Ok(id as BuildingId),
        _ => Err(Error::IdOutOfRange(token.to_string())),
    }
}

fn parse_degree(token: &str) -> Result<usize, Error> {
    if !DEGREE_REGEX.is_match(token) {
        return Err(Error::InvalidDegreeText(token.to_string()));
    }

    match token.parse::<usize>() {
        Ok(degree) if degree < MAX_BUILDING_ID => Ok(degree),
        _ => Err(Error::DegreeOutOfRange(token.to_string())),
    }
}
