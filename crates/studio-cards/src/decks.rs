//! Static card decks
//!
//! Reference data printed on the physical workshop cards. Read-only.

use crate::catalog::{CardDef, CriteriaDef, MissionDef};

/// Everyday objects to augment
pub(crate) const THINGS: &[CardDef] = &[
    CardDef::new(
        "t1",
        "Clothing",
        "Any piece of ordinary clothing, for example a sweater, a pair of trousers or a shirt.",
    ),
    CardDef::new(
        "t2",
        "Luggage",
        "A bag or backpack that is carried along during travels.",
    ),
    CardDef::new(
        "t3",
        "Pen or Pencil",
        "A writing tool, for example a pen, a pencil or a marker.",
    ),
    CardDef::new(
        "t4",
        "Keychain",
        "A keychain or a key.",
    ),
    CardDef::new(
        "t5",
        "Eyewear",
        "A pair of ordinary glasses or sunglasses.",
    ),
    CardDef::new(
        "t6",
        "Watch",
        "An ordinary wristwatch.",
    ),
    CardDef::new(
        "t7",
        "Wallet",
        "A wallet, purse or card case used to carry money and credit cards.",
    ),
    CardDef::new(
        "t8",
        "Bike",
        "A bicycle, a part of it, or some other object used in conjunction, for example a helmet or a lock.",
    ),
    CardDef::new(
        "t9",
        "Custom Thing",
        "Sketch or describe your new object here.",
    ),
    CardDef::new(
        "t10",
        "Jewelry",
        "A piece of jewelry, for example a ring, an armlet or a necklace.",
    ),
    CardDef::new(
        "t11",
        "Plant",
        "A household plant, flower or its planter.",
    ),
    CardDef::new(
        "t12",
        "Sport Equipment",
        "A football, a tennis racket or another piece of sporting equipment.",
    ),
    CardDef::new(
        "t13",
        "Umbrella",
        "An umbrella or part of it.",
    ),
    CardDef::new(
        "t14",
        "Coffee Cup",
        "A cup or mug for coffee or tea.",
    ),
    CardDef::new(
        "t15",
        "Furniture",
        "A piece of furniture in the home, for example a chair, a table or a sofa.",
    ),
    CardDef::new(
        "t16",
        "Piggy Bank",
        "A piggy bank or similar objects that are used to save money.",
    ),
    CardDef::new(
        "t17",
        "Headgear",
        "A piece of headgear, for example a cap, a beanie or a helmet.",
    ),
    CardDef::new(
        "t18",
        "Shoe",
        "Shoes or some part of a shoe, for example the shoelaces or the sole.",
    ),
    CardDef::new(
        "t19",
        "Public Transport",
        "A bus, train or tram part of public transport, including parts such as doors, seats, or the bus stop.",
    ),
    CardDef::new(
        "t20",
        "Street",
        "A street that is either used by cars or as a sidewalk by people.",
    ),
    CardDef::new(
        "t21",
        "Building",
        "A building found in urban or rural areas, for example an office, gym, store, school or restaurant.",
    ),
    CardDef::new(
        "t22",
        "Wheelchair",
        "A wheelchair to be used by people with limited mobility.",
    ),
    CardDef::new(
        "t23",
        "Public Bin",
        "A public bin for waste or recycling.",
    ),
    CardDef::new(
        "t24",
        "Bench",
        "A public bench.",
    ),
    CardDef::new(
        "t25",
        "Street Light",
        "A public illumination lamp found in streets or other urban areas.",
    ),
    CardDef::new(
        "t26",
        "Shower",
        "A shower, a sink or a bathtub.",
    ),
    CardDef::new(
        "t27",
        "Medication",
        "An object related to personal medication, for example a pill bottle, medicine cabinet, etc.",
    ),
    CardDef::new(
        "t28",
        "Boat",
        "A sailboat, motorboat or other forms of transportation over water.",
    ),
    CardDef::new(
        "t29",
        "Car",
        "A vehicle that is privately owned.",
    ),
];

/// Sensors
pub(crate) const SENSORS: &[CardDef] = &[
    CardDef::new(
        "s1",
        "Water Quality",
        "Water quality of the environment where the object is placed.",
    ),
    CardDef::new(
        "s2",
        "Location",
        "Latitude and longitude coordinates of the object.",
    ),
    CardDef::new(
        "s3",
        "Air Pollution",
        "Pollution of the air surrounding the object.",
    ),
    CardDef::new(
        "s4",
        "Weight",
        "Weight or change of weight of the object.",
    ),
    CardDef::new(
        "s5",
        "Humidity",
        "Air humidity of the ambient where the object is placed.",
    ),
    CardDef::new(
        "s6",
        "Temperature",
        "Temperature of the object or the ambient in its surroundings.",
    ),
    CardDef::new(
        "s7",
        "Motion",
        "Movement of humans or animals detected in the proximity of the object.",
    ),
    CardDef::new(
        "s8",
        "Distance",
        "Distance measured from the object to an external obstacle.",
    ),
    CardDef::new(
        "s9",
        "Soil Moisture",
        "Humidity and water contained in the soil where the object is placed.",
    ),
    CardDef::new(
        "s10",
        "Energy",
        "Energy usage of the object.",
    ),
    CardDef::new(
        "s11",
        "Sound",
        "Noise and sounds from the ambient surrounding the object.",
    ),
    CardDef::new(
        "s12",
        "Custom Sensor",
        "Sketch or describe your new sensor here.",
    ),
];

/// Human actions the object reacts to
pub(crate) const ACTIONS: &[CardDef] = &[
    CardDef::new(
        "a1",
        "Shake",
        "The user shakes the object.",
    ),
    CardDef::new(
        "a2",
        "Rotate",
        "The user rotates the object along one of the three axes.",
    ),
    CardDef::new(
        "a3",
        "Proximity",
        "The user moves near the object without actually touching it.",
    ),
    CardDef::new(
        "a4",
        "Tap",
        "The user taps the object, either with a single or double tap.",
    ),
    CardDef::new(
        "a5",
        "Location Change",
        "The user moves the object to a specific location, or away from it.",
    ),
    CardDef::new(
        "a6",
        "Tilt",
        "The user tilts the object on one of the three axes.",
    ),
    CardDef::new(
        "a7",
        "Lift",
        "The user lifts the object from a static surface.",
    ),
    CardDef::new(
        "a8",
        "Drop",
        "The user drops the object to the ground.",
    ),
    CardDef::new(
        "a9",
        "Custom Action",
        "Sketch or describe your new human action here.",
    ),
];

/// Ways the object answers
pub(crate) const FEEDBACK: &[CardDef] = &[
    CardDef::new(
        "f1",
        "Text",
        "The object displays a short text message to the user.",
    ),
    CardDef::new(
        "f2",
        "Motion",
        "The object moves in response to a trigger.",
    ),
    CardDef::new(
        "f3",
        "Emoji",
        "The object displays some kind of emotional response.",
    ),
    CardDef::new(
        "f4",
        "Timeline",
        "The object provides a visualization of data over time.",
    ),
    CardDef::new(
        "f5",
        "Shapeshift",
        "The object changes its shape in some way.",
    ),
    CardDef::new(
        "f6",
        "Vibrate",
        "The object starts vibrating.",
    ),
    CardDef::new(
        "f7",
        "Blink",
        "A point of light on the object starts blinking.",
    ),
    CardDef::new(
        "f8",
        "Color Change",
        "A light on the object changes or fades from one color to another.",
    ),
    CardDef::new(
        "f9",
        "Sound",
        "The object emits a sound.",
    ),
];

/// Connected services
pub(crate) const SERVICES: &[CardDef] = &[
    CardDef::new(
        "sv1",
        "Email",
        "A service that allows to send and receive emails.",
    ),
    CardDef::new(
        "sv2",
        "Health and Fitness",
        "A service providing access to health and fitness data of the user.",
    ),
    CardDef::new(
        "sv3",
        "Music Streaming",
        "A service to control or notify music playback of a speaker or other sound devices.",
    ),
    CardDef::new(
        "sv4",
        "Instant Messaging",
        "SMS or other instant messaging services.",
    ),
    CardDef::new(
        "sv5",
        "Cloud Storage",
        "A database or generic online document-based storage service.",
    ),
    CardDef::new(
        "sv6",
        "Public Transit",
        "Data from the public transport system, for example bus or train schedules.",
    ),
    CardDef::new(
        "sv7",
        "Traffic",
        "Data about vehicular traffic and road accidents.",
    ),
    CardDef::new(
        "sv8",
        "Calendar and Time",
        "A service connecting to your calendar, allowing to schedule appointments or check availability.",
    ),
    CardDef::new(
        "sv9",
        "Social Media",
        "A service connecting to social media accounts to retrieve or post data.",
    ),
    CardDef::new(
        "sv10",
        "Weather",
        "Data from a weather forecast service, for example temperature, rain probability, UV index, etc.",
    ),
    CardDef::new(
        "sv11",
        "Bank Account",
        "A service allowing to update or retrieve data from an online banking account.",
    ),
    CardDef::new(
        "sv12",
        "Smart Home",
        "A service allowing to retrieve sensor data and control the components of a smart home.",
    ),
    CardDef::new(
        "sv13",
        "Public Webcam",
        "A video feed from a public camera or surveillance camera.",
    ),
    CardDef::new(
        "sv14",
        "News and Sports",
        "Data from news providers or sport results.",
    ),
];

/// Workshop missions
pub(crate) const MISSIONS: &[MissionDef] = &[
    MissionDef::new(
        "m1",
        "Time-saver",
        "Create an idea that simplifies or automates a task that people normally spend time doing against their wishes.",
        "A washing machine that orders new detergent when it senses it is running low.",
    ),
    MissionDef::new(
        "m2",
        "Enjoyable Objects",
        "Create an idea where the objects are so pleasant or playful to use that people will want to spend time with, regardless of what else it does.",
        "A piggy bank that starts smiling and grunting when you give it money.",
    ),
    MissionDef::new(
        "m3",
        "Social Interaction",
        "Create an idea that helps to facilitate some kind of interaction between people.",
        "A pin for breaking the ice at a party that lights up when you are near your table companion.",
    ),
    MissionDef::new(
        "m4",
        "Habit Changing",
        "Create an idea that helps a user to form or change a long-term habit. The usefulness decreases over time as the habit is established.",
        "Shoelaces that glow brighter or darker according with the number of steps taken during the day.",
    ),
    MissionDef::new(
        "m5",
        "Trojan Horse",
        "Create an idea that seemingly does one thing, but where the intention is to produce another, deeper effect.",
        "A coffee cup that changes color when you have a scheduled appointment.",
    ),
    MissionDef::new(
        "m6",
        "Expression",
        "Create an idea that allows new ways to express yourself creatively or emotionally.",
        "Stairs that turn into piano keys when someone steps on them.",
    ),
    MissionDef::new(
        "m7",
        "Safekeeping",
        "Create an idea that protects the user or something that is valuable to the user.",
        "A bike that alerts you when it has moved while you are not around.",
    ),
    MissionDef::new(
        "m8",
        "Sixth Sense",
        "Create an idea that gives the user some kind of superpower, like new types of senses, perceiving new information, etc.",
        "A necklace that changes color based on the air quality of your surroundings.",
    ),
    MissionDef::new(
        "m9",
        "Tangibles",
        "Create an idea where the object itself solves a task where you would normally have had to use a screen.",
        "An umbrella that lights up when there is rain on the forecast for the day.",
    ),
    MissionDef::new(
        "m10",
        "Teleportation",
        "Create and idea that makes you feel like being in multiple places at once, or that let you experience some aspects of a different place.",
        "An alarm clock that every morning wakes you up with sounds and lights from different places in the world.",
    ),
    MissionDef::new(
        "m11",
        "Obstacles",
        "Create an idea where a task is intentionally made harder to discourage bad habits or create additional challenges.",
        "An alarm clock that moves around the room forcing the users to chase it if they are oversleeping.",
    ),
    MissionDef::new(
        "m12",
        "Omniscience",
        "Create an idea that provides the user with knowledge, or with access to information.",
        "An earring that can translate foreign languages spoken around you to your native tongue.",
    ),
    MissionDef::new(
        "m13",
        "Immortality",
        "Create an idea that can help the user save something for posterity, or perhaps that is able to give health benefits to the user.",
        "A mirror that takes a picture of you every day to keep a memory of that day in your life.",
    ),
    MissionDef::new(
        "m14",
        "Custom Mission",
        "Formulate your own mission that addresses a specific challenge, value, or opportunity related to your chosen persona and context.",
        "How can we help refugees feel safer in public transport?",
    ),
];

/// Target user groups
pub(crate) const PERSONAS: &[CardDef] = &[
    CardDef::new(
        "p1",
        "Refugee",
        "A 22 years old war refugee, named Jena, or her friends and family.",
    ),
    CardDef::new(
        "p2",
        "Emergency Worker",
        "A 46 year old firefighter, named Paul, or his rescue team.",
    ),
    CardDef::new(
        "p3",
        "Tourist",
        "A 52 years old tourist, named Peter, or his travel group.",
    ),
    CardDef::new(
        "p4",
        "Construction Worker",
        "A 37 years old city worker, named Jane, or her work team.",
    ),
    CardDef::new(
        "p5",
        "Disabled",
        "A 43 years old that lives on a wheelchair, named Tom, or his paralympic sport team.",
    ),
    CardDef::new(
        "p6",
        "Elderly",
        "A 72 years old retired man called Harry, or his group of friends from the retirement home.",
    ),
    CardDef::new(
        "p7",
        "Child",
        "A 3 year old girl, named Bea or her group of friends and schoolmates.",
    ),
    CardDef::new(
        "p8",
        "Yourself",
        "You, your family, or other social groups or communities you are part of.",
    ),
    CardDef::new(
        "p9",
        "Custom Persona",
        "Sketch or describe your new user group or persona here.",
    ),
];

/// Scenarios (sustainable development goals)
pub(crate) const SCENARIOS: &[CardDef] = &[
    CardDef::new(
        "sc1",
        "1 No Poverty",
        "Extreme poverty affects 11% of the world population. How can IoT technology help with promoting micro enterprises and social protection, in a sustainable way?",
    ),
    CardDef::new(
        "sc2",
        "2 Zero Hunger",
        "Two billion people are expected to be undernourished by 2050. How IoT technological advancements in agriculture and livestock management can support an improved, yet ethical farming system?",
    ),
    CardDef::new(
        "sc3",
        "3 Good Health and Well-being",
        "Children born into poverty are twice as likely to die as those from wealthier families. How to improve sanitation and hygiene, reduce pollution and use more efficient and clean technologies for cooking?",
    ),
    CardDef::new(
        "sc4",
        "4 Quality Education",
        "More than 600 million youth worldwide lack basic mathematics and literacy skills. How school building designs, educational tools and methods can be improved through the use of IoT technology?",
    ),
    CardDef::new(
        "sc5",
        "5 Gender Equality",
        "Women and girls still suffer from discrimination and violence in every part of the world. How IoT technology can help providing equal access to education, healthcare and careers via personal empowerment?",
    ),
    CardDef::new(
        "sc6",
        "6 Clean Water and Sanitation",
        "Water scarcity and lack of sanitation services affect more than 40% of the global population. How IoT technology can help developing countries in managing freshwater and sanitation facilities at a local level?",
    ),
    CardDef::new(
        "sc7",
        "7 Affordable and Clean Energy",
        "Access to clean and affordable electricity is essential for development and sustainability. How IoT technology can help achieving universal access to energy, increased energy efficiency and use of renewables?",
    ),
    CardDef::new(
        "sc8",
        "8 Decent Work and Economic Growth",
        "Roughly half the world's population still lives on the equivalent of about US$2 a day. How IoT technology can allow people to have quality jobs that stimulate the economy while not harming the environment?",
    ),
    CardDef::new(
        "sc9",
        "9 Industry, Innovation and Infrastructure",
        "Industrialization and growth requires modern infrastructures for transport, irrigation and energy. How IoT technology can foster the development of reliable, sustainable and resilient infrastructure to support growth?",
    ),
    CardDef::new(
        "sc10",
        "10 Reduced Inequalities",
        "Economic growth is not sufficient to reduce poverty if it's not available for all. How IoT technology can reduce disparities in access to health and education services and other assets on a global scale?",
    ),
    CardDef::new(
        "sc11",
        "11 Sustainable Cities and Communities",
        "Cities are hubs for ideas, culture and commerce; but also known for traffic, pollution and inequalities. How IoT technology can help dealing with the challenges of urbanization, foster growth and provide safe affordable housing?",
    ),
    CardDef::new(
        "sc12",
        "12 Responsible Consumption and Production",
        "Material consumption of natural resources is increasing globally. How IoT technology can help educating consumers on sustainable consumption, production and efficient use of natural resources?",
    ),
    CardDef::new(
        "sc13",
        "13 Climate Action",
        "Climate change is costing lives due to extreme weather, rising sea levels and droughts. How IoT technology can help improving awareness, mitigation and transition to a low-carbon economy?",
    ),
    CardDef::new(
        "sc14",
        "14 Life Below Water",
        "Oceans and seas are vital sources of drinking water and they absorb 30% of CO2 produced by humans. How IoT technology can help preventing and reducing pollution, protect coastal ecosystem for healthy and productive oceans?",
    ),
    CardDef::new(
        "sc15",
        "15 Life on Land",
        "Forests cover 33% of the Earth's surface, protect biodiversity and are key to fight climate change. How IoT technology can halt desertification, help protecting flora and fauna biodiversity and foster ethical use of land-sources?",
    ),
    CardDef::new(
        "sc16",
        "16 Peace, Justice and Strong Institutions",
        "Violence against children, human trafficking and sexual violence are important to address for sustainable development. How IoT technology can aid peaceful societies, respect human rights and tackle corruption?",
    ),
    CardDef::new(
        "sc17",
        "17 Partnerships for the Goals",
        "A successful agenda requires partnerships among governments, the private sector and civil society. How IoT technology can help building partnership, attract investment and develop regulations sustaining growth?",
    ),
    CardDef::new(
        "sc18",
        "Custom Scenario",
        "Sketch or describe your new scenario here.",
    ),
];

/// Evaluation criteria
pub(crate) const CRITERIA: &[CriteriaDef] = &[
    CriteriaDef::new(
        "c1",
        "Sustainability",
        "An idea that is environmentally friendly or that can encourage sustainable behaviors.",
        "Would the product idea be a net positive for the environment? How does its lifecycle look like?",
    ),
    CriteriaDef::new(
        "c2",
        "Market Potential",
        "Product ideas that attract a large audience which is willing to pay to use them.",
        "How would investors respond to the product idea? Can you see a big company formed around the product?",
    ),
    CriteriaDef::new(
        "c3",
        "User Friendly",
        "Ideas that solve a real need for the users and that are easy to use for a large number of people.",
        "Would users' life be easier with the product than without it? Could both children and elderlies use it?",
    ),
    CriteriaDef::new(
        "c4",
        "Feasibility",
        "Ideas that solve the problem in a plausible manner and seem realistic to develop.",
        "Would you invest your savings in the development of the product idea? Do you know about similar products being successful?",
    ),
    CriteriaDef::new(
        "c5",
        "Creativity",
        "Ideas that solve the problem in a clever and unusual way.",
        "Does the product idea surprise you or make you think twice about the problem? Would you turn your head if you saw someone else using it?",
    ),
    CriteriaDef::new(
        "c6",
        "Attraction",
        "The attractiveness of the idea, as in products that the user is proud to own.",
        "Would you like to have the product for yourself? Do you think the target audience would like it as well?",
    ),
    CriteriaDef::new(
        "c7",
        "Utility",
        "How useful and practical are the ideas.",
        "Does the idea solve a real problem for its users? Can you imagine it being used every day?",
    ),
    CriteriaDef::new(
        "c8",
        "Enjoyment",
        "How fun or enjoyable are the ideas for their users.",
        "Would you like to spend time with the product, even if you don't really need it? Is it something you would tell your friends about?",
    ),
    CriteriaDef::new(
        "c9",
        "Innovation",
        "Ideas that solve new problems through skillful use of technology.",
        "Would technology pioneers be interested in your idea? How would the news headlines about the idea read like?",
    ),
    CriteriaDef::new(
        "c10",
        "Custom Criteria",
        "Describe a criteria of your choice here.",
        "",
    ),
];
