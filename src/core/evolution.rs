//! Evolution chains: reconstruction from the pairwise evolution table, the
//! `{{Evobox}}` template and the sentence used in the opening paragraph.
//!
//! Chains are either a simple path or a path that branches at its last
//! step (Tyrogue into Hitmonlee/Hitmonchan/Hitmontop). A branch in the
//! middle of a chain is never produced by the game data and is rejected.

use crate::core::utils::{image_name, title_case};
use crate::data::dex::DexNumber;
use crate::data::evolutions::EvolutionMethod;
use crate::data::lookup::Lookup;
use crate::data::records::RecordFile;
use crate::error::{Result, WikiError};
use std::collections::HashSet;

pub const STANDALONE_SENTENCE: &str = "It is not known to evolve from or into any other Pokémon.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionStage {
    pub internal_name: String,
    pub display_name: String,
    pub types: Vec<String>,
    /// 1 for the first stage of the family.
    pub depth: usize,
    /// How the previous stage evolves into this one.
    pub method: Option<EvolutionMethod>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchKind {
    Linear,
    /// The stage at `at_depth` evolves into `count` alternatives.
    Branch { at_depth: usize, count: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionChain {
    stages: Vec<EvolutionStage>,
    branch: BranchKind,
    position: usize,
}

impl EvolutionChain {
    pub fn stages(&self) -> &[EvolutionStage] {
        &self.stages
    }

    pub fn branch(&self) -> BranchKind {
        self.branch
    }

    /// 1-indexed position of the creature the chain was built for.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn subject(&self) -> &EvolutionStage {
        &self.stages[self.position - 1]
    }

    pub fn is_standalone(&self) -> bool {
        self.stages.len() == 1
    }

    pub fn at_depth(&self, depth: usize) -> Vec<&EvolutionStage> {
        self.stages.iter().filter(|stage| stage.depth == depth).collect()
    }

    /// Types gained by some later stage that the subject lacks, used to
    /// flag moves that only get the same-type bonus after evolving.
    ///
    /// Known limitation: every later stage counts, so the base stage of a
    /// branching family (Eevee) is credited with the types of all branches
    /// although each individual evolution gets only one of them.
    pub fn future_types(&self) -> Vec<String> {
        let subject = self.subject();
        let mut future: Vec<String> = Vec::new();
        for stage in self.stages.iter().filter(|stage| stage.depth > subject.depth) {
            for stage_type in &stage.types {
                if !subject.types.contains(stage_type) && !future.contains(stage_type) {
                    future.push(stage_type.clone());
                }
            }
        }
        future
    }

    fn header(&self) -> String {
        match self.branch {
            BranchKind::Linear => format!("{{{{Evobox-{}", self.stages.len()),
            BranchKind::Branch { at_depth, count } => {
                format!("{{{{Evobox-{at_depth}branch{count}")
            }
        }
    }
}

/// Builds evolution chains and renders them, resolving stage names, types
/// and method details through the record file and lookup tables.
pub struct EvolutionHandler<'a> {
    lookup: &'a dyn Lookup,
    records: &'a RecordFile,
}

impl<'a> EvolutionHandler<'a> {
    pub fn new(lookup: &'a dyn Lookup, records: &'a RecordFile) -> Self {
        Self { lookup, records }
    }

    pub fn build_chain(&self, internal_name: &str) -> Result<EvolutionChain> {
        let link = self.lookup.evolution(internal_name)?;
        if link.is_standalone() {
            return Ok(EvolutionChain {
                stages: vec![self.stage(internal_name, 1, None)?],
                branch: BranchKind::Linear,
                position: 1,
            });
        }

        let first = self.first_stage(internal_name)?;
        let mut stages = vec![self.stage(&first, 1, None)?];
        let mut branch = BranchKind::Linear;
        let mut seen: HashSet<String> = HashSet::from([first.clone()]);
        let mut current = first;
        let mut depth = 1;

        loop {
            let targets: Vec<String> = self
                .lookup
                .evolution(&current)?
                .evolutions()
                .into_iter()
                .map(str::to_string)
                .collect();
            match targets.as_slice() {
                [] => break,
                [next] => {
                    if !seen.insert(next.clone()) {
                        return Err(WikiError::EvolutionCycle(internal_name.to_string()));
                    }
                    depth += 1;
                    stages.push(self.stage(next, depth, Some(self.method_into(next)?))?);
                    current = next.clone();
                }
                alternatives => {
                    for next in alternatives {
                        if !self.lookup.evolution(next)?.evolutions().is_empty() {
                            return Err(WikiError::UnsupportedBranch(current));
                        }
                        stages.push(self.stage(next, depth + 1, Some(self.method_into(next)?))?);
                    }
                    branch = BranchKind::Branch {
                        at_depth: depth,
                        count: alternatives.len(),
                    };
                    break;
                }
            }
        }

        let position = stages
            .iter()
            .position(|stage| stage.internal_name == internal_name)
            .map(|idx| idx + 1)
            .ok_or_else(|| WikiError::InvalidField {
                record: internal_name.to_string(),
                field: "PreEvolution".to_string(),
                value: link.pre_evolution.clone(),
            })?;
        tracing::debug!(
            name = internal_name,
            stages = stages.len(),
            position,
            ?branch,
            "built evolution chain"
        );
        Ok(EvolutionChain {
            stages,
            branch,
            position,
        })
    }

    /// Follows `PreEvolution` back to the first stage of the family.
    fn first_stage(&self, internal_name: &str) -> Result<String> {
        let mut seen: HashSet<String> = HashSet::from([internal_name.to_string()]);
        let mut current = internal_name.to_string();
        while let Some(pre) = self.lookup.evolution(&current)?.pre_evolution() {
            if !seen.insert(pre.to_string()) {
                return Err(WikiError::EvolutionCycle(internal_name.to_string()));
            }
            current = pre.to_string();
        }
        Ok(current)
    }

    fn method_into(&self, internal_name: &str) -> Result<EvolutionMethod> {
        self.lookup
            .evolution(internal_name)?
            .pre_evolution_method
            .clone()
            .ok_or_else(|| WikiError::MissingField {
                record: internal_name.to_string(),
                field: "PreEvolutionMethod".to_string(),
            })
    }

    fn stage(
        &self,
        internal_name: &str,
        depth: usize,
        method: Option<EvolutionMethod>,
    ) -> Result<EvolutionStage> {
        let record = self.records.extract(internal_name)?;
        Ok(EvolutionStage {
            internal_name: internal_name.to_string(),
            display_name: self.display_name(internal_name)?,
            types: record.types()?,
            depth,
            method,
        })
    }

    fn display_name(&self, internal_name: &str) -> Result<String> {
        let record = self.records.extract(internal_name)?;
        let dex = DexNumber::from_record(&record)?;
        Ok(self.lookup.pokemon_info(&dex.to_string())?.display_name.clone())
    }

    pub fn create_evolution_box(&self, chain: &EvolutionChain) -> Result<Vec<String>> {
        let subject = chain.subject();
        let first_type = &subject.types[0];
        let second_type = subject.types.get(1).unwrap_or(first_type);
        let mut evo_box = vec![
            chain.header(),
            format!("|type1 = {first_type}"),
            format!("|type2 = {second_type}"),
        ];

        for (idx, stage) in chain.stages().iter().enumerate() {
            let key = idx + 1;
            evo_box.push(format!("|type1-{key} = {}", stage.types[0]));
            if let Some(second) = stage.types.get(1) {
                evo_box.push(format!("|type2-{key} = {second}"));
            }
            evo_box.push(format!("|image{key} = {}Front.png", image_name(&stage.display_name)));
            evo_box.push(format!("|name{key} = {}", stage.display_name));
            if let Some(method) = chain.stages().get(key).and_then(|next| next.method.as_ref()) {
                evo_box.push(format!("|evo{key} = {}", self.method_markup(method)?));
            }
        }

        evo_box.push("}}".to_string());
        Ok(evo_box)
    }

    /// Evobox markup for an evolution method.
    pub fn method_markup(&self, method: &EvolutionMethod) -> Result<String> {
        use EvolutionMethod::*;
        Ok(match method {
            Level(level) => {
                format!("{{{{Item|Rare Candy}}}}<br />{{{{color|000|Level {level}}}}}")
            }
            LevelFemale(level) => format!(
                "{{{{Item|Rare Candy}}}}<br />{{{{color|000|Level {level}}}}}<br><small>(Female)</small>"
            ),
            Item(item) => format!("{{{{Item|{item}}}}}<br />{{{{color|000|{item}}}}}"),
            ItemMale(item) => format!(
                "{{{{Item|{item}}}}}<br>{{{{color2|000|{item}}}}}<br><small>(Male)</small>"
            ),
            ItemFemale(item) => format!(
                "{{{{Item|{item}}}}}<br>{{{{color2|000|{item}}}}}<br><small>(Female)</small>"
            ),
            Happiness(_) => {
                "{{Item|Soothe Bell}}<br>'''Level up'''<br>with {{color|000|high friendship}}"
                    .to_string()
            }
            HappinessDay(_) => "{{Item|Soothe Bell}}<br>'''Level up''' at day <br>with {{color|000|high friendship}}".to_string(),
            HappinessNight(_) => "{{Item|Soothe Bell}}<br>'''Level up''' at night <br>with {{color|000|high friendship}}".to_string(),
            DayHoldItem(item) => format!(
                "{{{{Item|{item}}}}}<br>{{{{color|000|Level up}}}}<br>holding {{{{color2|000|{item}}}}}<br>(Day)"
            ),
            NightHoldItem(item) => format!(
                "{{{{Item|{item}}}}}<br>{{{{color|000|Level up}}}}<br>holding {{{{color2|000|{item}}}}}<br>(Night)"
            ),
            HasMove(move_name) => {
                let info = self.lookup.move_info(&title_case(move_name))?;
                format!(
                    "{{{{Item|Rare Candy}}}} + [[File:TM{}.png|link={} (move)|20px]]<br>'''Level up'''<br><small>knowing {{{{mcolor|{}}}}}</small>",
                    info.move_type, info.name, info.name
                )
            }
            Location(location) => format!(
                "{{{{item|Rare Candy}}}} + {{{{item|Town Map}}}}<br>{{{{color|000|Level up}}}}<br><small>in the area of<br>{{{{color2|000|{location}}}}}</small>"
            ),
            AttackGreater(level) => format!(
                "{{{{Item|Rare Candy}}}}{{{{Item|Power Bracer}}}}<br>{{{{color2|000|Level {level}}}}}<br><small>({{{{color2|000|Attack}}}} > {{{{color2|000|Defense}}}})</small>"
            ),
            DefenseGreater(level) => format!(
                "{{{{Item|Rare Candy}}}}{{{{Item|Power Belt}}}}<br>{{{{color2|000|Level {level}}}}}<br><small>({{{{color2|000|Defense}}}} > {{{{color2|000|Attack}}}})</small>"
            ),
            AtkDefEqual(level) => format!(
                "{{{{Item|Rare Candy}}}}{{{{Item|Macho Brace}}}}<br>{{{{color2|000|Level {level}}}}}<br><small>({{{{color2|000|Attack}}}} = {{{{color2|000|Defense}}}})</small>"
            ),
            HasInParty(partner) => {
                let record = self.records.extract(partner)?;
                let dex = DexNumber::from_record(&record)?;
                let name = &self.lookup.pokemon_info(&dex.to_string())?.display_name;
                format!(
                    "{{{{EM|{dex}|{name}}}}}<br>'''Level up'''<br>with {{{{color2|000|{name}}}}} in party."
                )
            }
        })
    }

    /// Prose clause for an evolution method, e.g. "starting at level 16".
    pub fn method_clause(&self, method: &EvolutionMethod) -> Result<String> {
        use EvolutionMethod::*;
        Ok(match method {
            Level(level) => format!("starting at level {level}"),
            LevelFemale(level) => format!("starting at level {level} if female"),
            Item(item) => format!("when exposed to a {{{{Item|{item}}}}} [[{item}]]"),
            ItemMale(item) => format!("when exposed to a {{{{Item|{item}}}}} [[{item}]] if male"),
            ItemFemale(item) => {
                format!("when exposed to a {{{{Item|{item}}}}} [[{item}]] if female")
            }
            Happiness(_) => "when leveled up with high friendship".to_string(),
            HappinessDay(_) => "when leveled up with high friendship during the day".to_string(),
            HappinessNight(_) => {
                "when leveled up with high friendship during the night".to_string()
            }
            DayHoldItem(item) => format!(
                "when leveled up holding a {{{{Item|{item}}}}} [[{item}]] during the day"
            ),
            NightHoldItem(item) => format!(
                "when leveled up holding a {{{{Item|{item}}}}} [[{item}]] during the night"
            ),
            HasMove(move_name) => {
                let info = self.lookup.move_info(&title_case(move_name))?;
                format!(
                    "when leveled up while knowing [[{} (move)|{}]]",
                    info.name, info.name
                )
            }
            Location(location) => format!("when leveled up in [[{location}]]"),
            AttackGreater(level) => {
                format!("starting at level {level} if its Attack is higher than its Defense")
            }
            DefenseGreater(level) => {
                format!("starting at level {level} if its Defense is higher than its Attack")
            }
            AtkDefEqual(level) => {
                format!("starting at level {level} if its Attack and Defense are equal")
            }
            HasInParty(partner) => format!(
                "when leveled up with a [[{}]] in the party",
                self.display_name(partner)?
            ),
        })
    }

    /// "[[Name]] <clause>" where the clause describes `method`.
    fn described(&self, name: &str, method: Option<&EvolutionMethod>) -> Result<String> {
        match method {
            Some(method) => Ok(format!("[[{name}]] {}", self.method_clause(method)?)),
            None => Ok(format!("[[{name}]]")),
        }
    }

    /// Stages at `depth`, each described by how it is reached.
    fn forward(&self, chain: &EvolutionChain, depth: usize) -> Result<Option<String>> {
        let stages = chain.at_depth(depth);
        if stages.is_empty() {
            return Ok(None);
        }
        let described = stages
            .iter()
            .map(|stage| self.described(&stage.display_name, stage.method.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(join_alternatives(&described)))
    }

    /// Sentence for the opening paragraph, phrased from the subject's place
    /// in the chain.
    pub fn create_evolution_statement(&self, chain: &EvolutionChain) -> Result<String> {
        if chain.is_standalone() {
            return Ok(STANDALONE_SENTENCE.to_string());
        }
        let subject = chain.subject();
        let depth = subject.depth;
        let next = self.forward(chain, depth + 1)?;

        if depth == 1 {
            let next = next.unwrap_or_default();
            let mut statement = format!("It evolves into {next}");
            if chain.at_depth(depth + 1).len() == 1 {
                if let Some(after) = self.forward(chain, depth + 2)? {
                    statement.push_str(&format!(", which evolves into {after}"));
                }
            }
            statement.push('.');
            return Ok(statement);
        }

        // Stages before the branch point form a path, so each shallower depth
        // holds exactly one stage.
        let previous = chain.at_depth(depth - 1);
        let Some(previous) = previous.first() else {
            return Ok(STANDALONE_SENTENCE.to_string());
        };
        let from = self.described(&previous.display_name, subject.method.as_ref())?;

        if let Some(next) = next {
            return Ok(format!("It evolves from {from}, and later evolves into {next}."));
        }

        let mut statement = format!("It evolves from {from}");
        if let Some(earlier) = chain.at_depth(depth.saturating_sub(2)).first() {
            let earlier = self.described(&earlier.display_name, previous.method.as_ref())?;
            statement.push_str(&format!(", which evolves from {earlier}"));
        }
        statement.push('.');
        Ok(statement)
    }
}

/// "A", "A or B", "A, B or C".
fn join_alternatives(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {}", init.join(", "), last),
    }
}
