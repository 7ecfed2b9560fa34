use serde_json::json;
use xenowiki::core::moves::{StabMark, BREED_NONE};
use xenowiki::{LookupTables, MoveListGenerator, Record, Teachables};

fn tables() -> LookupTables {
    LookupTables::from_value(json!({
        "move_info": {
            "Scratch": {"Name": "Scratch", "CanHaveStab": true, "Type": "Normal"},
            "Ember": {"Name": "Ember", "CanHaveStab": true, "Type": "Fire"},
            "Wingattack": {"Name": "Wing Attack", "CanHaveStab": true, "Type": "Flying"},
            "Willowisp": {"Name": "Will-O-Wisp", "CanHaveStab": false, "Type": "Fire"},
            "Dragonrage": {"Name": "Dragon Rage", "CanHaveStab": false, "Type": "Dragon"},
            "Bite": {"Name": "Bite", "CanHaveStab": true, "Type": "Dark"},
            "Firepunch": {"Name": "Fire Punch", "CanHaveStab": true, "Type": "Fire"},
            "Airslash": {"Name": "Air Slash", "CanHaveStab": true, "Type": "Flying"}
        },
        "tm_info": {
            "Flamethrower": "35,yes,Fire",
            "Roost": "51,no,Flying",
            "Aerialace": "40,yes,Flying"
        }
    }))
    .expect("fixture tables")
}

fn charmeleon() -> Record {
    Record::new("CHARMELEON")
        .with_field("Type1", "FIRE")
        .with_field("Moves", "1,SCRATCH,1,EMBER,17,WINGATTACK,20,WILLOWISP")
        .with_field("EggMoves", "DRAGONRAGE,BITE")
        .with_field("Compatibility", "Monster,Dragon")
}

fn teachables() -> Teachables {
    Teachables {
        tm: vec!["FLAMETHROWER".to_string(), "ROOST".to_string(), "AERIALACE".to_string()],
        tutor: vec!["FIREPUNCH".to_string(), "AIRSLASH".to_string()],
    }
}

#[test]
fn level_moves_mark_current_and_future_stab() {
    let tables = tables();
    let record = charmeleon();
    let teach = teachables();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "Charmeleon", vec!["Flying".to_string()])
            .expect("generator");

    let list = generator.create_level_learn_list().expect("level list");
    assert_eq!(
        list,
        vec![
            "{{MoveLevelStart|Charmeleon|Fire|Fire}}",
            "{{MoveLevel+|1|Scratch}}",
            "{{MoveLevel+|1|Ember|'''}}",
            "{{MoveLevel+|17|Wing Attack|''}}",
            "{{MoveLevel+|20|Will-O-Wisp}}",
            "{{MoveLevelEnd|Charmeleon|Fire|Fire}}",
        ]
    );
}

#[test]
fn tm_moves_use_tm_numbers() {
    let tables = tables();
    let record = charmeleon();
    let teach = teachables();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "Charmeleon", vec!["Flying".to_string()])
            .expect("generator");

    let list = generator.create_tm_learn_list().expect("tm list");
    assert_eq!(
        list,
        vec![
            "{{MoveTMStart|Charmeleon|Fire|Fire}}",
            "{{MoveTM+|TM35|'''}}",
            "{{MoveTM+|TM51}}",
            "{{MoveTM+|TM40|''}}",
            "{{MoveTMEnd|Charmeleon|Fire|Fire}}",
        ]
    );
}

#[test]
fn breeding_moves_are_sorted_with_parent_placeholder() {
    let tables = tables();
    let record = charmeleon();
    let teach = teachables();
    let generator = MoveListGenerator::new(&record, &teach, &tables, "Charmeleon", Vec::new())
        .expect("generator");

    let list = generator.create_breeding_learn_list().expect("breed list");
    assert_eq!(
        list,
        vec![
            "{{MoveBreedStart|Charmeleon|Fire|Fire}}",
            "{{MoveBreed+|'''WIP'''|Bite}}",
            "{{MoveBreed+|'''WIP'''|Dragon Rage}}",
            "{{MoveBreedEnd|Charmeleon|Fire|Fire}}",
        ]
    );
}

#[test]
fn field_group_gets_smeargle_as_parent() {
    let tables = tables();
    let record = Record::new("EEVEE")
        .with_field("Type1", "NORMAL")
        .with_field("EggMoves", "SCRATCH")
        .with_field("Compatibility", "Field");
    let teach = Teachables::default();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "Eevee", Vec::new()).expect("generator");

    let list = generator.create_breeding_learn_list().expect("breed list");
    assert_eq!(list[1], "{{MoveBreed+|{{EM|107|Smeargle}} '''WIP'''|Scratch|'''}}");
}

#[test]
fn no_egg_moves() {
    let tables = tables();
    let record = Record::new("LAPRAS")
        .with_field("Type1", "WATER")
        .with_field("Type2", "ICE");
    let teach = Teachables::default();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "Lapras", Vec::new()).expect("generator");

    let list = generator.create_breeding_learn_list().expect("breed list");
    assert_eq!(
        list,
        vec![
            "{{MoveBreedStart|Lapras|Water|Ice}}",
            BREED_NONE,
            "{{MoveBreedEnd|Lapras|Water|Ice}}",
        ]
    );
}

#[test]
fn tutor_moves_are_sorted() {
    let tables = tables();
    let record = charmeleon();
    let teach = teachables();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "Charmeleon", vec!["Flying".to_string()])
            .expect("generator");

    let list = generator.create_tutor_learn_list().expect("tutor list");
    assert_eq!(
        list,
        vec![
            "{{MoveTutorStart|Charmeleon|Fire|Fire}}",
            "{{MoveTutor+|Air Slash|''|Varies}}",
            "{{MoveTutor+|Fire Punch|'''|Varies}}",
            "{{MoveTutorEnd|Charmeleon|Fire|Fire}}",
        ]
    );
}

#[test]
fn stab_requires_can_have_stab() {
    let tables = tables();
    let record = charmeleon();
    let teach = Teachables::default();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "Charmeleon", vec!["Flying".to_string()])
            .expect("generator");

    assert_eq!(generator.stab_mark("Fire", true), StabMark::Stab);
    assert_eq!(generator.stab_mark("Fire", false), StabMark::None);
    assert_eq!(generator.stab_mark("Flying", true), StabMark::Future);
    assert_eq!(generator.stab_mark("Water", true), StabMark::None);
}

#[test]
fn unknown_move_is_an_error() {
    let tables = tables();
    let record = Record::new("X")
        .with_field("Type1", "NORMAL")
        .with_field("Moves", "1,SPLASHDANCE");
    let teach = Teachables::default();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "X", Vec::new()).expect("generator");
    let err = generator.create_level_learn_list().expect_err("unknown move");
    assert!(err.to_string().contains("Splashdance"));
}

#[test]
fn odd_move_list_is_malformed() {
    let tables = tables();
    let record = Record::new("X")
        .with_field("Type1", "NORMAL")
        .with_field("Moves", "1,SCRATCH,5");
    let teach = Teachables::default();
    let generator =
        MoveListGenerator::new(&record, &teach, &tables, "X", Vec::new()).expect("generator");
    assert!(generator.create_level_learn_list().is_err());
}
