//! Embedded contact tables.

/// key, name, sheriff phone, sheriff website
pub(super) const COUNTIES: &[(&str, &str, &str, &str)] = &[
    (
        "jefferson",
        "Jefferson County",
        "(409) 835-8411",
        "https://www.co.jefferson.tx.us/sheriff",
    ),
    (
        "harris",
        "Harris County",
        "(713) 755-7628",
        "https://www.hcso.org",
    ),
    (
        "dallas",
        "Dallas County",
        "(214) 749-8641",
        "https://www.dallascounty.org/departments/sheriff",
    ),
    (
        "tarrant",
        "Tarrant County",
        "(817) 884-1213",
        "https://www.tarrantcounty.com/en/sheriff",
    ),
    (
        "bexar",
        "Bexar County",
        "(210) 335-6000",
        "https://www.bexar.org/1250/Sheriffs-Office",
    ),
    (
        "travis",
        "Travis County",
        "(512) 854-9770",
        "https://www.tcso.org",
    ),
    (
        "collin",
        "Collin County",
        "(972) 547-5100",
        "https://www.collincountytx.gov/sheriff",
    ),
    (
        "denton",
        "Denton County",
        "(940) 349-1600",
        "https://www.dentoncounty.gov/Departments/Sheriff",
    ),
    (
        "fort_bend",
        "Fort Bend County",
        "(281) 341-4665",
        "https://www.fbcso.org",
    ),
    (
        "williamson",
        "Williamson County",
        "(512) 943-1300",
        "https://www.wilco.org/Departments/Sheriff",
    ),
    (
        "hidalgo",
        "Hidalgo County",
        "(956) 383-8114",
        "https://www.hidalgocounty.us/269/Sheriffs-Office",
    ),
];

/// key, name, county, police phone, police website
pub(super) const CITIES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "port arthur",
        "Port Arthur",
        "Jefferson County",
        "(409) 983-8600",
        "https://www.portarthurtx.gov/departments/police",
    ),
    (
        "houston",
        "Houston",
        "Harris County",
        "(713) 884-3131",
        "https://www.houstontx.gov/police",
    ),
    (
        "san antonio",
        "San Antonio",
        "Bexar County",
        "(210) 207-7273",
        "https://www.sanantonio.gov/SAPD",
    ),
    (
        "dallas",
        "Dallas",
        "Dallas County",
        "(214) 671-4282",
        "https://www.dallaspolice.net",
    ),
    (
        "austin",
        "Austin",
        "Travis County",
        "(512) 974-5000",
        "https://www.austintexas.gov/department/police",
    ),
    (
        "fort worth",
        "Fort Worth",
        "Tarrant County",
        "(817) 392-4222",
        "https://www.fortworthtexas.gov/departments/police",
    ),
    (
        "el paso",
        "El Paso",
        "El Paso County",
        "(915) 212-4400",
        "https://www.elpasotexas.gov/police",
    ),
    (
        "arlington",
        "Arlington",
        "Tarrant County",
        "(817) 459-5700",
        "https://www.arlingtontx.gov/city_hall/departments/police",
    ),
    (
        "corpus christi",
        "Corpus Christi",
        "Nueces County",
        "(361) 886-2600",
        "https://www.cctexas.com/departments/police",
    ),
    (
        "plano",
        "Plano",
        "Collin County",
        "(972) 424-5678",
        "https://www.plano.gov/1183/Police",
    ),
    (
        "lubbock",
        "Lubbock",
        "Lubbock County",
        "(806) 775-2865",
        "https://www.mylubbock.us/departments/police",
    ),
    (
        "beaumont",
        "Beaumont",
        "Jefferson County",
        "(409) 832-1234",
        "https://www.beaumonttexas.gov/departments/police",
    ),
];
