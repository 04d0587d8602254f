//! Sample clinic data.
//!
//! The pet type catalogue matches the rows inserted by the migrations. The
//! sample owners, pets and visits are loaded on demand (`admin db seed`, or
//! the in-memory backend at startup).

use chrono::{NaiveDate, NaiveTime};

use crate::domain::entities::{Owner, Pet, PetType, Visit};
use crate::domain::repositories::{OwnerRepository, PetRepository, VisitRepository};
use crate::error::AppError;

/// Pet type names, in id order.
pub const PET_TYPES: [&str; 6] = ["cat", "dog", "lizard", "snake", "bird", "hamster"];

pub struct SampleOwner {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub telephone: &'static str,
    pub pets: &'static [SamplePet],
}

pub struct SamplePet {
    pub name: &'static str,
    /// (year, month, day)
    pub birth_date: (i32, u32, u32),
    pub type_name: &'static str,
    pub visits: &'static [SampleVisit],
}

pub struct SampleVisit {
    pub date: (i32, u32, u32),
    pub description: &'static str,
}

const fn pet(name: &'static str, birth_date: (i32, u32, u32), type_name: &'static str) -> SamplePet {
    SamplePet {
        name,
        birth_date,
        type_name,
        visits: &[],
    }
}

pub const SAMPLE_OWNERS: &[SampleOwner] = &[
    SampleOwner {
        first_name: "George",
        last_name: "Franklin",
        address: "110 W. Liberty St.",
        city: "Madison",
        telephone: "6085551023",
        pets: &[pet("Leo", (2010, 9, 7), "cat")],
    },
    SampleOwner {
        first_name: "Betty",
        last_name: "Davis",
        address: "638 Cardinal Ave.",
        city: "Sun Prairie",
        telephone: "6085551749",
        pets: &[pet("Basil", (2012, 8, 6), "hamster")],
    },
    SampleOwner {
        first_name: "Eduardo",
        last_name: "Rodriquez",
        address: "2693 Commerce St.",
        city: "McFarland",
        telephone: "6085558763",
        pets: &[pet("Rosy", (2011, 4, 17), "dog"), pet("Jewel", (2010, 3, 7), "dog")],
    },
    SampleOwner {
        first_name: "Harold",
        last_name: "Davis",
        address: "563 Friendly St.",
        city: "Windsor",
        telephone: "6085553198",
        pets: &[pet("Iggy", (2010, 11, 30), "lizard")],
    },
    SampleOwner {
        first_name: "Peter",
        last_name: "McTavish",
        address: "2387 S. Fair Way",
        city: "Madison",
        telephone: "6085552765",
        pets: &[pet("George", (2010, 1, 20), "snake")],
    },
    SampleOwner {
        first_name: "Jean",
        last_name: "Coleman",
        address: "105 N. Lake St.",
        city: "Monona",
        telephone: "6085552654",
        pets: &[
            SamplePet {
                name: "Samantha",
                birth_date: (2012, 9, 4),
                type_name: "cat",
                visits: &[
                    SampleVisit {
                        date: (2013, 1, 1),
                        description: "rabies shot",
                    },
                    SampleVisit {
                        date: (2013, 1, 4),
                        description: "spayed",
                    },
                ],
            },
            SamplePet {
                name: "Max",
                birth_date: (2012, 9, 4),
                type_name: "cat",
                visits: &[
                    SampleVisit {
                        date: (2013, 1, 2),
                        description: "rabies shot",
                    },
                    SampleVisit {
                        date: (2013, 1, 3),
                        description: "neutered",
                    },
                ],
            },
        ],
    },
    SampleOwner {
        first_name: "Jeff",
        last_name: "Black",
        address: "1450 Oak Blvd.",
        city: "Monona",
        telephone: "6085555387",
        pets: &[pet("Lucky", (2011, 8, 6), "bird")],
    },
    SampleOwner {
        first_name: "Maria",
        last_name: "Escobito",
        address: "345 Maple St.",
        city: "Madison",
        telephone: "6085557683",
        pets: &[pet("Mulligan", (2007, 2, 24), "dog")],
    },
    SampleOwner {
        first_name: "David",
        last_name: "Schroeder",
        address: "2749 Blackhawk Trail",
        city: "Madison",
        telephone: "6085559435",
        pets: &[pet("Freddy", (2010, 3, 9), "bird")],
    },
    SampleOwner {
        first_name: "Carlos",
        last_name: "Estaban",
        address: "2335 Independence La.",
        city: "Waunakee",
        telephone: "6085555487",
        pets: &[pet("Lucky", (2010, 6, 24), "dog"), pet("Sly", (2012, 6, 8), "cat")],
    },
];

fn date((year, month, day): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Counts of rows written by [`load_sample_data`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub owners: usize,
    pub pets: usize,
    pub visits: usize,
}

/// Writes the sample owners, their pets and the pets' visits.
///
/// Pet types are resolved by name against the store's catalogue; a name the
/// store does not know leaves the pet without a type.
///
/// # Errors
///
/// Returns the first store error encountered. Rows written before the
/// failure are kept.
pub async fn load_sample_data<O, P, V>(
    owners: &O,
    pets: &P,
    visits: &V,
) -> Result<SeedSummary, AppError>
where
    O: OwnerRepository + ?Sized,
    P: PetRepository + ?Sized,
    V: VisitRepository + ?Sized,
{
    let types = pets.find_pet_types().await?;
    let mut summary = SeedSummary::default();

    for sample in SAMPLE_OWNERS {
        let mut owner = Owner::new();
        owner.first_name = sample.first_name.to_string();
        owner.last_name = sample.last_name.to_string();
        owner.address = sample.address.to_string();
        owner.city = sample.city.to_string();
        owner.telephone = sample.telephone.to_string();

        for sample_pet in sample.pets {
            let mut pet = Pet::new();
            pet.name = sample_pet.name.to_string();
            pet.birth_date = date(sample_pet.birth_date);
            pet.pet_type = find_type(&types, sample_pet.type_name);
            owner.add_pet(&mut pet);
        }

        let saved = owners.save(owner).await?;
        summary.owners += 1;
        summary.pets += sample.pets.len();

        for sample_pet in sample.pets {
            let Some(pet_id) = saved
                .pets()
                .iter()
                .find(|p| p.name == sample_pet.name)
                .and_then(|p| p.id())
            else {
                continue;
            };

            for sample_visit in sample_pet.visits {
                let mut visit = Visit::new(pet_id, sample_visit.description);
                if let Some(day) = date(sample_visit.date) {
                    visit.date = day.and_time(NaiveTime::MIN).and_utc();
                }
                visits.save(visit).await?;
                summary.visits += 1;
            }
        }
    }

    tracing::info!(
        owners = summary.owners,
        pets = summary.pets,
        visits = summary.visits,
        "Sample data loaded"
    );
    Ok(summary)
}

fn find_type(types: &[PetType], name: &str) -> Option<PetType> {
    types.iter().find(|t| t.name == name).cloned()
}
