//! A small noun hierarchy shared by the unit tests.
//!
//! `individual` and `edible_fruit` meet at `physical_entity`, `solid` names
//! two synsets, and synsets 8 and 13 each have two hypernyms.

use indoc::indoc;

use crate::{ConceptIndex, parse_hypernyms, parse_synsets};

pub const SYNSETS: &str = indoc! {"
    0,entity,that which is perceived to have its own distinct existence
    1,physical_entity,an entity that has physical existence
    2,abstraction abstract_entity,a general concept formed from specific instances
    3,object physical_object,a tangible and visible entity
    4,whole unit,an assemblage of parts regarded as a single entity
    5,living_thing animate_thing,a living entity
    6,organism being,a living thing that can act independently
    7,causal_agent cause causal_agency,any entity that produces an effect
    8,person individual someone somebody mortal soul,a human being
    9,matter,that which has mass and occupies space
    10,solid,matter that is solid at room temperature
    11,food solid_food,any solid substance used as a source of nourishment
    12,produce green_goods green_groceries garden_truck,fresh fruits and vegetables
    13,edible_fruit,edible reproductive body of a seed plant
    14,natural_object,an object occurring naturally
    15,plant_part plant_structure,any part of a plant
    16,plant_organ,a functional part of a plant
    17,reproductive_structure,the parts of a plant involved in reproduction
    18,fruit,the ripened reproductive body of a seed plant
    19,location,a point or extent in space
    20,region,a large indefinite location on the surface of the Earth
    21,geographical_area geographic_area geographical_region geographic_region,a demarcated area of the Earth
    22,urban_area populated_area,a geographical area constituting a city or town
    23,municipality,an urban district having corporate status
    24,apple,fruit with red or yellow or green skin, sweet to tart crisp whitish flesh
    25,banana,elongated crescent-shaped yellow fruit with soft sweet flesh
    26,city metropolis urban_center,a large and densely populated urban area
    27,town,an urban area smaller than a city
    28,group grouping,any number of entities considered as a unit
    29,people,people in general considered as a whole
    30,shape form,the spatial arrangement of something
    31,solid,a three-dimensional shape
"};

pub const HYPERNYMS: &str = indoc! {"
    1,0
    2,0
    3,1
    4,3
    5,4
    6,5
    7,1
    8,6,7
    9,1
    10,9
    11,10
    12,11
    13,12,18
    14,4
    15,14
    16,15
    17,16
    18,17
    19,1
    20,19
    21,20
    22,21
    23,22
    24,13
    25,13
    26,23
    27,23
    28,2
    29,28
    30,2
    31,30
"};

pub fn nouns_index() -> ConceptIndex {
    index_from(SYNSETS, HYPERNYMS)
}

pub fn index_from(synsets: &str, hypernyms: &str) -> ConceptIndex {
    let synsets = parse_synsets(synsets).expect("synsets fixture parses");
    let hypernyms = parse_hypernyms(hypernyms).expect("hypernyms fixture parses");
    ConceptIndex::build(synsets, hypernyms).expect("fixture is a rooted DAG")
}
