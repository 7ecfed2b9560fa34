use crate::config::Config;
use crate::core::evolution::EvolutionHandler;
use crate::core::locations::LocationDataGenerator;
use crate::core::moves::MoveListGenerator;
use crate::core::species::PokemonBoxGenerator;
use crate::data::encounters::{EncounterFile, ZonePolicy};
use crate::data::lookup::{Lookup, LookupTables};
use crate::data::records::RecordFile;
use crate::data::tm::TmFile;
use crate::data::type_chart::TypeChart;
use crate::error::{Result, WikiError};

/// Everything a page is built from, loaded once per run.
pub struct GameData {
    lookup: Box<dyn Lookup>,
    records: RecordFile,
    tm: TmFile,
    encounters: EncounterFile,
    zone_policy: ZonePolicy,
    type_chart: TypeChart,
}

impl GameData {
    pub fn new(
        lookup: Box<dyn Lookup>,
        records: RecordFile,
        tm: TmFile,
        encounters: EncounterFile,
    ) -> Self {
        Self {
            lookup,
            records,
            tm,
            encounters,
            zone_policy: ZonePolicy::default(),
            type_chart: TypeChart::new(),
        }
    }

    pub fn with_zone_policy(mut self, zone_policy: ZonePolicy) -> Self {
        self.zone_policy = zone_policy;
        self
    }

    pub fn load(config: &Config) -> Result<Self> {
        let lookup = LookupTables::load_from_dir(&config.references_dir)?;
        let records = RecordFile::load(&config.pokemon_path())?;
        let tm = TmFile::load(&config.tm_path(), config.tm_section_end)?;
        let encounters = EncounterFile::load(&config.encounters_path())?;
        tracing::info!(
            data_dir = %config.data_dir.display(),
            references_dir = %config.references_dir.display(),
            "loaded game data"
        );
        Ok(Self::new(Box::new(lookup), records, tm, encounters)
            .with_zone_policy(config.zone_policy()))
    }

    pub fn lookup(&self) -> &dyn Lookup {
        self.lookup.as_ref()
    }

    pub fn records(&self) -> &RecordFile {
        &self.records
    }

    pub fn tm(&self) -> &TmFile {
        &self.tm
    }

    pub fn encounters(&self) -> &EncounterFile {
        &self.encounters
    }

    pub fn zone_policy(&self) -> ZonePolicy {
        self.zone_policy
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }
}

/// A page section: either a box or a list of titled sub-sections.
enum Section {
    Lines(Vec<String>),
    Nested(Vec<(&'static str, Vec<String>)>),
}

/// Assembles the full wiki page of one creature.
pub struct WikiPage<'a> {
    data: &'a GameData,
}

impl<'a> WikiPage<'a> {
    pub fn new(data: &'a GameData) -> Self {
        Self { data }
    }

    pub fn generate(&self, internal_name: &str) -> Result<Vec<String>> {
        let data = self.data;
        let lookup = data.lookup();
        let record = data.records().extract(internal_name)?;
        let stage = |section: &'static str| {
            move |source: WikiError| WikiError::Section {
                section,
                name: internal_name.to_string(),
                source: Box::new(source),
            }
        };

        let boxes = PokemonBoxGenerator::new(&record, lookup).map_err(stage("infobox"))?;
        let evolutions = EvolutionHandler::new(lookup, data.records());
        let chain = evolutions
            .build_chain(internal_name)
            .map_err(stage("evolution"))?;
        let statement = evolutions
            .create_evolution_statement(&chain)
            .map_err(stage("opening paragraph"))?;

        let teachables = data.tm().teachables(internal_name);
        let moves = MoveListGenerator::new(
            &record,
            &teachables,
            lookup,
            boxes.display_name(),
            chain.future_types(),
        )
        .map_err(stage("learnset"))?;

        let zones = data
            .encounters()
            .find_zones(internal_name, lookup, data.zone_policy())
            .map_err(stage("game locations"))?;
        let locations = LocationDataGenerator::new(&record, &zones, lookup);

        let header_footer = boxes.create_header_footer().map_err(stage("header"))?;
        let sections: Vec<(&str, Section)> = vec![
            (
                "Pokédex entries",
                Section::Lines(boxes.create_pokedex_entry().map_err(stage("Pokédex entries"))?),
            ),
            (
                "Game locations",
                Section::Lines(
                    locations
                        .create_game_locations()
                        .map_err(stage("game locations"))?,
                ),
            ),
            (
                "Held items",
                Section::Lines(boxes.create_wild_items().map_err(stage("held items"))?),
            ),
            (
                "Stats",
                Section::Lines(boxes.create_stats().map_err(stage("stats"))?),
            ),
            (
                "Type effectiveness",
                Section::Lines(
                    boxes
                        .create_type_effectiveness(data.type_chart())
                        .map_err(stage("type effectiveness"))?,
                ),
            ),
            (
                "Learnset",
                Section::Nested(vec![
                    ("By leveling up", moves.create_level_learn_list().map_err(stage("learnset"))?),
                    ("By TM/HM", moves.create_tm_learn_list().map_err(stage("learnset"))?),
                    ("By breeding", moves.create_breeding_learn_list().map_err(stage("learnset"))?),
                    ("By tutoring", moves.create_tutor_learn_list().map_err(stage("learnset"))?),
                ]),
            ),
            (
                "Evolution",
                Section::Lines(
                    evolutions
                        .create_evolution_box(&chain)
                        .map_err(stage("evolution"))?,
                ),
            ),
            ("Sprites", Section::Lines(boxes.create_sprites())),
        ];

        let mut page = header_footer.clone();
        page.extend(boxes.create_infobox().map_err(stage("infobox"))?);
        page.extend(boxes.create_opening_paragraph(&statement));
        page.push(String::new());

        for (title, section) in sections {
            page.push(format!("=='''{title}'''=="));
            match section {
                Section::Lines(lines) => page.extend(lines),
                Section::Nested(subsections) => {
                    for (subtitle, lines) in subsections {
                        page.push(format!("==='''{subtitle}'''==="));
                        page.extend(lines);
                    }
                }
            }
        }

        page.extend([String::new(), String::new()]);
        page.extend(header_footer);
        tracing::debug!(pokemon = internal_name, lines = page.len(), "assembled page");
        Ok(page)
    }
}
