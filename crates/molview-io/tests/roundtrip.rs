//! Round-trip tests: record → molecule → record.

use molview_io::{build_molecule, export_molecule, parse_record, builtin_molecules};
use molview_mol::ElementTable;

const POSITION_TOLERANCE: f32 = 1e-6;

#[test]
fn two_atom_import_then_export_reproduces_record() {
    let json = r#"{
        "name": "Test",
        "atoms": [
            { "type": "C", "position": { "x": 0, "y": 0, "z": 0 }, "charge": "0" },
            { "type": "O", "position": { "x": 1.5, "y": 0, "z": 0 }, "charge": "0" }
        ],
        "bonds": [ { "atom1Index": 0, "atom2Index": 1, "isDouble": false } ]
    }"#;
    let record = parse_record(json).unwrap();
    let mol = build_molecule(ElementTable::builtin(), &record);

    assert_eq!(mol.name, "Test");
    assert_eq!(mol.atom_count(), 2);
    assert_eq!(mol.bond_count(), 1);
    assert!(!mol.bonds()[0].is_double());

    let (exported, warnings) = export_molecule(&mol);
    assert!(warnings.is_empty());
    assert_eq!(exported.name, "Test");
    assert_eq!(exported.atoms.len(), 2);
    assert_eq!(exported.bonds.len(), 1);
    assert_eq!(exported.bonds[0].atom1_index, 0);
    assert_eq!(exported.bonds[0].atom2_index, 1);
    assert!(!exported.bonds[0].is_double);
}

#[test]
fn builtin_molecules_round_trip_structurally() {
    let table = ElementTable::builtin();
    for record in builtin_molecules() {
        let mol = build_molecule(table, record);
        let (exported, warnings) = export_molecule(&mol);
        assert!(warnings.is_empty(), "warnings exporting {}", record.name);

        assert_eq!(exported.name, record.name);
        assert_eq!(exported.formula, record.formula);
        assert_eq!(exported.atoms.len(), record.atoms.len());
        for (orig, exp) in record.atoms.iter().zip(&exported.atoms) {
            assert_eq!(orig.symbol, exp.symbol);
            assert_eq!(orig.charge, exp.charge);
            assert!((orig.position.x - exp.position.x).abs() < POSITION_TOLERANCE);
            assert!((orig.position.y - exp.position.y).abs() < POSITION_TOLERANCE);
            assert!((orig.position.z - exp.position.z).abs() < POSITION_TOLERANCE);
        }

        assert_eq!(exported.bonds.len(), record.bonds.len());
        for (orig, exp) in record.bonds.iter().zip(&exported.bonds) {
            assert_eq!(orig.atom1_index, exp.atom1_index);
            assert_eq!(orig.atom2_index, exp.atom2_index);
            assert_eq!(orig.is_double, exp.is_double);
        }
    }
}

#[test]
fn double_bonds_survive_the_round_trip() {
    // Baking soda and lactate each carry one double bond.
    let table = ElementTable::builtin();
    for idx in [0usize, 2] {
        let record = &builtin_molecules()[idx];
        let mol = build_molecule(table, record);
        let (exported, _) = export_molecule(&mol);
        let doubles: Vec<_> = exported.bonds.iter().filter(|b| b.is_double).collect();
        assert_eq!(doubles.len(), 1, "in {}", record.name);
    }
}

#[test]
fn export_parses_back_through_import() {
    let table = ElementTable::builtin();
    let record = &builtin_molecules()[1]; // Ethanol
    let mol = build_molecule(table, record);
    let (exported, _) = export_molecule(&mol);

    let json = molview_io::to_json_string(&exported).unwrap();
    let reparsed = parse_record(&json).unwrap();
    let rebuilt = build_molecule(table, &reparsed);

    assert_eq!(rebuilt.atom_count(), mol.atom_count());
    assert_eq!(rebuilt.bond_count(), mol.bond_count());
}
