use indexmap::IndexMap;
use serde_json::json;
use std::fs;
use std::path::Path;
use xenowiki::tools::lists::{ListGenerator, ListKind};
use xenowiki::tools::speed::{base_speeds, load_tier_list, SpeedTiers};
use xenowiki::{EncounterFile, LookupTables, RecordFile};

const ORAN: &str = "{{Item|{{{1|Oran Berry}}}}}";

fn lines(raw: &str) -> Vec<String> {
    raw.lines().map(str::to_string).collect()
}

fn list_tables() -> LookupTables {
    LookupTables::from_value(json!({
        "pokemon_info": {
            "001": {"InternalName": "ALPHA", "DisplayName": "Alpha"},
            "002": {"InternalName": "BETA", "DisplayName": "Beta"},
            "003": {"InternalName": "GAMMA", "DisplayName": "Gamma"}
        },
        "ability_info": {"STATIC": "Static", "RUNAWAY": "Run Away", "GUTS": "Guts"},
        "wild_item_info": {"ORANBERRY": "Oran Berry"},
        "location_info": {"001": "Route 1"},
        "static_encounters": {"BETA": {"Lab": "Gift"}}
    }))
    .expect("fixture tables")
}

fn list_records() -> RecordFile {
    RecordFile::from_lines(lines(
        "[1]
Name=Alpha
InternalName=ALPHA
Type1=NORMAL
BaseStats=10,20,30,40,50,60
EffortPoints=0,0,0,1,0,0
Abilities=STATIC,RUNAWAY
HiddenAbility=GUTS
WildItemCommon=ORANBERRY
WildItemUncommon=ORANBERRY
WildItemRare=ORANBERRY
[2]
Name=Beta
InternalName=BETA
Type1=NORMAL
BaseStats=50,50,50,50,50,50
EffortPoints=2,0,0,0,0,0
Abilities=GUTS
WildItemUncommon=ORANBERRY
[3]
Name=Gamma
InternalName=GAMMA
Type1=NORMAL
BaseStats=1,1,1,1,1,1
EffortPoints=0,0,1,0,0,0
Abilities=STATIC",
    ))
}

fn list_encounters() -> EncounterFile {
    EncounterFile::from_lines(lines(
        "#########################
001 # Route 1
25,0,0
Land
ALPHA,2,4",
    ))
}

#[test]
fn lists_cover_every_creature_in_dex_order() {
    let tables = list_tables();
    let records = list_records();
    let encounters = list_encounters();
    let lists = ListGenerator::new(&tables, &records, &encounters)
        .generate()
        .expect("lists");

    assert_eq!(
        lists.get(ListKind::EvYield),
        [
            "{{EVYieldListEntry|001|Alpha|0|0|0|0|0|1}}",
            "{{EVYieldListEntry|002|Beta|2|0|0|0|0|0}}",
            "{{EVYieldListEntry|003|Gamma|0|0|1|0|0|0}}",
        ]
    );
    assert_eq!(
        lists.get(ListKind::BaseStats)[0],
        "{{BaseStatsListEntry|001|Alpha|10|20|30|50|60|40}}"
    );
    assert_eq!(
        lists.get(ListKind::Ability),
        [
            "{{AbilityListEntry|001|Alpha|Static|Run Away|Guts}}",
            "{{AbilityListEntry|002|Beta|Guts||}}",
            "{{AbilityListEntry|003|Gamma|Static||}}",
        ]
    );
}

#[test]
fn drops_split_by_encounterability() {
    let tables = list_tables();
    let records = list_records();
    let encounters = list_encounters();
    let lists = ListGenerator::new(&tables, &records, &encounters)
        .generate()
        .expect("lists");

    // Three identical slots collapse into the last cell.
    assert_eq!(
        lists.get(ListKind::EncounterableDrops),
        [format!("{{{{HeldItemsEntry|Alpha||||{ORAN}}}}}")]
    );
    // Gift statics are not wild encounters; Gamma holds nothing.
    assert_eq!(
        lists.get(ListKind::UnencounterableDrops),
        [format!("{{{{HeldItemsEntry|Beta||{ORAN}|}}}}")]
    );
}

#[test]
fn vintage_forms_borrow_base_encounters() {
    let tables = LookupTables::from_value(json!({
        "pokemon_info": {
            "001": {"InternalName": "ALPHA", "DisplayName": "Alpha"},
            "V001": {"InternalName": "VALPHA", "DisplayName": "Vintage Alpha"},
            "V002": {"InternalName": "VBETA", "DisplayName": "Vintage Beta"}
        },
        "ability_info": {"STATIC": "Static"},
        "wild_item_info": {"ORANBERRY": "Oran Berry"},
        "location_info": {"001": "Route 1"}
    }))
    .expect("fixture tables");
    let records = RecordFile::from_lines(lines(
        "[1]
Name=Alpha
InternalName=ALPHA
BaseStats=1,1,1,1,1,1
EffortPoints=0,0,0,1,0,0
Abilities=STATIC
[2]
Name=Alpha
InternalName=VALPHA
BaseStats=1,1,1,1,1,1
EffortPoints=0,0,0,1,0,0
Abilities=STATIC
WildItemRare=ORANBERRY
[3]
Name=Beta
InternalName=VBETA
BaseStats=1,1,1,1,1,1
EffortPoints=0,0,0,1,0,0
Abilities=STATIC
WildItemRare=ORANBERRY",
    ));
    let encounters = list_encounters();
    let lists = ListGenerator::new(&tables, &records, &encounters)
        .generate()
        .expect("lists");

    assert_eq!(
        lists.get(ListKind::EncounterableDrops),
        [format!("{{{{HeldItemsEntry|Vintage Alpha|||{ORAN}}}}}")]
    );
    // No Beta in the wild, so its vintage form stays unencounterable.
    assert_eq!(
        lists.get(ListKind::UnencounterableDrops),
        [format!("{{{{HeldItemsEntry|Vintage Beta|||{ORAN}}}}}")]
    );
}

#[test]
fn lists_are_written_one_file_each() {
    let tables = list_tables();
    let records = list_records();
    let encounters = list_encounters();
    let lists = ListGenerator::new(&tables, &records, &encounters)
        .generate()
        .expect("lists");

    let dir = tempfile::tempdir().expect("temp dir");
    let written = lists.write_to_dir(dir.path()).expect("write lists");
    assert_eq!(written.len(), ListKind::ALL.len());

    let abilities = fs::read_to_string(dir.path().join("ability_list.txt")).unwrap();
    assert_eq!(abilities.lines().count(), 3);
    assert!(abilities.starts_with("{{AbilityListEntry|001|Alpha|"));
}

#[test]
fn missing_record_stops_the_lists() {
    let tables = list_tables();
    let records = RecordFile::from_lines(lines("[1]\nName=Alpha\nInternalName=ALPHA"));
    let encounters = list_encounters();
    assert!(ListGenerator::new(&tables, &records, &encounters).generate().is_err());
}

#[test]
fn speed_tiers_from_fixture() {
    let tables = LookupTables::load_from_dir(Path::new("tests/fixtures/references")).expect("tables");
    let records = RecordFile::load(Path::new("tests/fixtures/gamedata/pokemon.txt")).expect("records");

    let bases = base_speeds(&tables, &records).expect("base speeds");
    assert_eq!(bases.get("Charizard"), Some(&100));
    assert_eq!(bases.get("Tyrogue"), Some(&35));
    assert_eq!(bases.len(), 8);

    let tiers = SpeedTiers::build(&bases, &["Charizard".to_string(), "Lapras".to_string()]);
    assert_eq!(tiers.master.len(), 8 * 25);
    assert_eq!(tiers.master[0].name, "Charizard");
    assert_eq!(tiers.master[0].boosts, "+2");
    assert!(tiers
        .master
        .windows(2)
        .all(|pair| pair[0].speed >= pair[1].speed));
    assert_eq!(tiers.singles.len(), 50);
    assert!(tiers
        .singles
        .iter()
        .all(|row| row.name == "Charizard" || row.name == "Lapras"));
}

#[test]
fn shared_speed_rows_are_grouped_in_singles() {
    let mut bases = IndexMap::new();
    bases.insert("Zeta".to_string(), 80);
    bases.insert("Alpha".to_string(), 80);
    bases.insert("Slowpoke".to_string(), 15);

    let tiers = SpeedTiers::build(&bases, &["Zeta".to_string(), "Alpha".to_string()]);
    assert_eq!(tiers.master.len(), 75);
    assert_eq!(tiers.singles.len(), 25);
    assert!(tiers.singles.iter().all(|row| row.name == "Alpha, Zeta"));
}

#[test]
fn speed_csv_has_named_columns() {
    let mut bases = IndexMap::new();
    bases.insert("Alpha".to_string(), 100);
    let tiers = SpeedTiers::build(&bases, &[]);

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("master.csv");
    SpeedTiers::write_csv(&tiers.master, &path).expect("csv");

    let content = fs::read_to_string(&path).unwrap();
    let mut rows = content.lines();
    assert_eq!(rows.next(), Some("Speed,Name,Base,IVs,EVs,Nature,Boosts"));
    assert_eq!(rows.next(), Some("334,Alpha,100,31,252,Positive,+2"));
    assert_eq!(content.lines().count(), 26);
}

#[test]
fn tier_list_skips_headings() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    std::io::Write::write_all(&mut file, b"=OU=\nCharizard\n\n  Lapras \n=UU=\n").unwrap();
    assert_eq!(load_tier_list(file.path()).unwrap(), vec!["Charizard", "Lapras"]);
}
