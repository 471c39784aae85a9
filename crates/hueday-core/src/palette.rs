//! Named reference colors used for nearest-name lookup.
//!
//! Entries are ordered by hex value; lookups that tie resolve to the
//! entry listed first.

use crate::color::HexColor;

/// A single named reference color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub hex: HexColor,
}

impl NamedColor {
    pub const fn new(rgb: u32, name: &'static str) -> Self {
        Self {
            name,
            hex: HexColor::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        }
    }
}

/// The reference palette.
pub struct Palette;

impl Palette {
    /// All named colors, in lookup order.
    pub fn all() -> &'static [NamedColor] {
        NAMED_COLORS
    }

    /// Look up a color by exact name.
    pub fn by_name(name: &str) -> Option<&'static NamedColor> {
        NAMED_COLORS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

pub const NAMED_COLORS: &[NamedColor] = &[
    NamedColor::new(0x000000, "Black"),
    NamedColor::new(0x000080, "Navy Blue"),
    NamedColor::new(0x0000C8, "Dark Blue"),
    NamedColor::new(0x0000FF, "Blue"),
    NamedColor::new(0x000741, "Stratos"),
    NamedColor::new(0x001B1C, "Swamp"),
    NamedColor::new(0x002387, "Resolution Blue"),
    NamedColor::new(0x002900, "Deep Fir"),
    NamedColor::new(0x002E20, "Burnham"),
    NamedColor::new(0x002FA7, "International Klein Blue"),
    NamedColor::new(0x003153, "Prussian Blue"),
    NamedColor::new(0x003366, "Midnight Blue"),
    NamedColor::new(0x003399, "Smalt"),
    NamedColor::new(0x003532, "Deep Teal"),
    NamedColor::new(0x003E40, "Cyprus"),
    NamedColor::new(0x004620, "Kaitoke Green"),
    NamedColor::new(0x0047AB, "Cobalt"),
    NamedColor::new(0x004816, "Crusoe"),
    NamedColor::new(0x004950, "Sherpa Blue"),
    NamedColor::new(0x0056A7, "Endeavour"),
    NamedColor::new(0x00581A, "Camarone"),
    NamedColor::new(0x0066CC, "Science Blue"),
    NamedColor::new(0x0066FF, "Blue Ribbon"),
    NamedColor::new(0x00755E, "Tropical Rain Forest"),
    NamedColor::new(0x0076A3, "Allports"),
    NamedColor::new(0x007BA7, "Deep Cerulean"),
    NamedColor::new(0x007EC7, "Lochmara"),
    NamedColor::new(0x007FFF, "Azure Radiance"),
    NamedColor::new(0x008080, "Teal"),
    NamedColor::new(0x0095B6, "Bondi Blue"),
    NamedColor::new(0x009DC4, "Pacific Blue"),
    NamedColor::new(0x00A693, "Persian Green"),
    NamedColor::new(0x00A86B, "Jade"),
    NamedColor::new(0x00CC99, "Caribbean Green"),
    NamedColor::new(0x00CCCC, "Robin's Egg Blue"),
    NamedColor::new(0x00FF00, "Green"),
    NamedColor::new(0x00FF7F, "Spring Green"),
    NamedColor::new(0x00FFFF, "Cyan / Aqua"),
    NamedColor::new(0x010D1A, "Blue Charcoal"),
    NamedColor::new(0x011635, "Midnight"),
    NamedColor::new(0x011D13, "Holly"),
    NamedColor::new(0x012731, "Daintree"),
    NamedColor::new(0x01361C, "Cardin Green"),
    NamedColor::new(0x01371A, "County Green"),
    NamedColor::new(0x013E62, "Astronaut Blue"),
    NamedColor::new(0x013F6A, "Regal Blue"),
    NamedColor::new(0x014B43, "Aqua Deep"),
    NamedColor::new(0x015E85, "Orient"),
    NamedColor::new(0x016162, "Blue Stone"),
    NamedColor::new(0x016D39, "Fun Green"),
    NamedColor::new(0x01796F, "Pine Green"),
    NamedColor::new(0x017987, "Blue Lagoon"),
    NamedColor::new(0x01826B, "Deep Sea"),
    NamedColor::new(0x01A368, "Green Haze"),
    NamedColor::new(0x022D15, "English Holly"),
    NamedColor::new(0x02402C, "Sherwood Green"),
    NamedColor::new(0x02478E, "Congress Blue"),
    NamedColor::new(0x024E46, "Evening Sea"),
    NamedColor::new(0x026395, "Bahama Blue"),
    NamedColor::new(0x02866F, "Observatory"),
    NamedColor::new(0x02A4D3, "Cerulean"),
    NamedColor::new(0x03163C, "Tangaroa"),
    NamedColor::new(0x032B52, "Green Vogue"),
    NamedColor::new(0x036A6E, "Mosque"),
    NamedColor::new(0x041004, "Midnight Moss"),
    NamedColor::new(0x041322, "Black Pearl"),
    NamedColor::new(0x042E4C, "Blue Whale"),
    NamedColor::new(0x044022, "Zuccini"),
    NamedColor::new(0x044259, "Teal Blue"),
    NamedColor::new(0x051040, "Deep Cove"),
    NamedColor::new(0x051657, "Gulf Blue"),
    NamedColor::new(0x055989, "Venice Blue"),
    NamedColor::new(0x056F57, "Watercourse"),
    NamedColor::new(0x062A78, "Catalina Blue"),
    NamedColor::new(0x063537, "Tiber"),
    NamedColor::new(0x069B81, "Gossamer"),
    NamedColor::new(0x06A189, "Niagara"),
    NamedColor::new(0x073A50, "Tarawera"),
    NamedColor::new(0x080110, "Jaguar"),
    NamedColor::new(0x081910, "Black Bean"),
    NamedColor::new(0x082567, "Deep Sapphire"),
    NamedColor::new(0x088370, "Elf Green"),
    NamedColor::new(0x08E8DE, "Bright Turquoise"),
    NamedColor::new(0x092256, "Downriver"),
    NamedColor::new(0x09230F, "Palm Green"),
    NamedColor::new(0x09255D, "Madison"),
    NamedColor::new(0x093624, "Bottle Green"),
    NamedColor::new(0x095859, "Deep Sea Green"),
    NamedColor::new(0x097F4B, "Salem"),
    NamedColor::new(0x0A001C, "Black Russian"),
    NamedColor::new(0x0A480D, "Dark Fern"),
    NamedColor::new(0x0A6906, "Japanese Laurel"),
    NamedColor::new(0x0A6F75, "Atoll"),
    NamedColor::new(0x0B0B0B, "Cod Gray"),
    NamedColor::new(0x0B0F08, "Marshland"),
    NamedColor::new(0x0B1107, "Gordons Green"),
    NamedColor::new(0x0B1304, "Black Forest"),
    NamedColor::new(0x0B6207, "San Felix"),
    NamedColor::new(0x0BDA51, "Malachite"),
    NamedColor::new(0x0C0B1D, "Ebony"),
    NamedColor::new(0x0C0D0F, "Woodsmoke"),
    NamedColor::new(0x0C1911, "Racing Green"),
    NamedColor::new(0x0C7A79, "Surfie Green"),
    NamedColor::new(0x0C8990, "Blue Chill"),
    NamedColor::new(0x0D0332, "Black Rock"),
    NamedColor::new(0x0D1117, "Bunker"),
    NamedColor::new(0x0D1C19, "Aztec"),
    NamedColor::new(0x0D2E1C, "Bush"),
    NamedColor::new(0x0E0E18, "Cinder"),
    NamedColor::new(0x0E2A30, "Firefly"),
    NamedColor::new(0x0F2D9E, "Torea Bay"),
    NamedColor::new(0x10121D, "Vulcan"),
    NamedColor::new(0x101405, "Green Waterloo"),
    NamedColor::new(0x105852, "Eden"),
    NamedColor::new(0x110C6C, "Arapawa"),
    NamedColor::new(0x120A8F, "Ultramarine"),
    NamedColor::new(0x123447, "Elephant"),
    NamedColor::new(0x126B40, "Jewel"),
    NamedColor::new(0x130000, "Diesel"),
    NamedColor::new(0x130A06, "Asphalt"),
    NamedColor::new(0x13264D, "Blue Zodiac"),
    NamedColor::new(0x134F19, "Parsley"),
    NamedColor::new(0x140600, "Nero"),
    NamedColor::new(0x1450AA, "Tory Blue"),
    NamedColor::new(0x151F4C, "Bunting"),
    NamedColor::new(0x1560BD, "Denim"),
    NamedColor::new(0x15736B, "Genoa"),
    NamedColor::new(0x161928, "Mirage"),
    NamedColor::new(0x161D10, "Hunter Green"),
    NamedColor::new(0x162A40, "Big Stone"),
    NamedColor::new(0x163222, "Celtic"),
    NamedColor::new(0x16322C, "Timber Green"),
    NamedColor::new(0x163531, "Gable Green"),
    NamedColor::new(0x171F04, "Pine Tree"),
    NamedColor::new(0x175579, "Chathams Blue"),
    NamedColor::new(0x182D09, "Deep Forest Green"),
    NamedColor::new(0x18587A, "Blumine"),
    NamedColor::new(0x19330E, "Palm Leaf"),
    NamedColor::new(0x193751, "Nile Blue"),
    NamedColor::new(0x1959A8, "Fun Blue"),
    NamedColor::new(0x1A1A68, "Lucky Point"),
    NamedColor::new(0x1AB385, "Mountain Meadow"),
    NamedColor::new(0x1B0245, "Tolopea"),
    NamedColor::new(0x1B1035, "Haiti"),
    NamedColor::new(0x1B127B, "Deep Koamaru"),
    NamedColor::new(0x1B1404, "Acadia"),
    NamedColor::new(0x1B2F11, "Seaweed"),
    NamedColor::new(0x1B3162, "Biscay"),
    NamedColor::new(0x1B659D, "Matisse"),
    NamedColor::new(0x1C1208, "Crowshead"),
    NamedColor::new(0x1C1E13, "Rangoon Green"),
    NamedColor::new(0x1C39BB, "Persian Blue"),
    NamedColor::new(0x1C402E, "Everglade"),
    NamedColor::new(0x1C7C7D, "Elm"),
    NamedColor::new(0x1D6142, "Green Pea"),
    NamedColor::new(0x1E0F04, "Creole"),
    NamedColor::new(0x1E1609, "Karaka"),
    NamedColor::new(0x1E1708, "El Paso"),
    NamedColor::new(0x1E385B, "Cello"),
    NamedColor::new(0x1E433C, "Te Papa Green"),
    NamedColor::new(0x1E90FF, "Dodger Blue"),
    NamedColor::new(0x1E9AB0, "Eastern Blue"),
    NamedColor::new(0x1F120F, "Night Rider"),
    NamedColor::new(0x1FC2C2, "Java"),
    NamedColor::new(0x20208D, "Jacksons Purple"),
    NamedColor::new(0x202E54, "Cloud Burst"),
    NamedColor::new(0x204852, "Blue Dianne"),
    NamedColor::new(0x211A0E, "Eternity"),
    NamedColor::new(0x220878, "Deep Blue"),
    NamedColor::new(0x228B22, "Forest Green"),
    NamedColor::new(0x233418, "Mallard"),
    NamedColor::new(0x240A40, "Violet"),
    NamedColor::new(0x240C02, "Kilamanjaro"),
    NamedColor::new(0x242A1D, "Log Cabin"),
    NamedColor::new(0x242E16, "Black Olive"),
    NamedColor::new(0x24500F, "Green House"),
    NamedColor::new(0x251607, "Graphite"),
    NamedColor::new(0x251706, "Cannon Black"),
    NamedColor::new(0x251F4F, "Port Gore"),
    NamedColor::new(0x25272C, "Shark"),
    NamedColor::new(0x25311C, "Green Kelp"),
    NamedColor::new(0x2596D1, "Curious Blue"),
    NamedColor::new(0x260368, "Paua"),
    NamedColor::new(0x26056A, "Paris M"),
    NamedColor::new(0x261105, "Wood Bark"),
    NamedColor::new(0x261414, "Gondola"),
    NamedColor::new(0x262335, "Steel Gray"),
    NamedColor::new(0x26283B, "Ebony Clay"),
    NamedColor::new(0x273A81, "Bay of Many"),
    NamedColor::new(0x27504B, "Plantation"),
    NamedColor::new(0x278A5B, "Eucalyptus"),
    NamedColor::new(0x281E15, "Oil"),
    NamedColor::new(0x283A77, "Astronaut"),
    NamedColor::new(0x286ACD, "Mariner"),
    NamedColor::new(0x290C5E, "Violent Violet"),
    NamedColor::new(0x292130, "Bastille"),
    NamedColor::new(0x292319, "Zeus"),
    NamedColor::new(0x292937, "Charade"),
    NamedColor::new(0x297B9A, "Jelly Bean"),
    NamedColor::new(0x29AB87, "Jungle Green"),
    NamedColor::new(0x2A0359, "Cherry Pie"),
    NamedColor::new(0x2A140E, "Coffee Bean"),
    NamedColor::new(0x2A2630, "Baltic Sea"),
    NamedColor::new(0x2A380B, "Turtle Green"),
    NamedColor::new(0x2A52BE, "Cerulean Blue"),
    NamedColor::new(0x2B0202, "Sepia Black"),
    NamedColor::new(0x2B194F, "Valhalla"),
    NamedColor::new(0x2B3228, "Heavy Metal"),
    NamedColor::new(0x2C0E8C, "Blue Gem"),
    NamedColor::new(0x2C1632, "Revolver"),
    NamedColor::new(0x2C2133, "Bleached Cedar"),
    NamedColor::new(0x2C8C84, "Lochinvar"),
    NamedColor::new(0x2D2510, "Mikado"),
    NamedColor::new(0x2D383A, "Outer Space"),
    NamedColor::new(0x2D569B, "St Tropaz"),
    NamedColor::new(0x2E0329, "Jacaranda"),
    NamedColor::new(0x2E1905, "Jacko Bean"),
    NamedColor::new(0x2E3222, "Rangitoto"),
    NamedColor::new(0x2E3F62, "Rhino"),
    NamedColor::new(0x2E8B57, "Sea Green"),
    NamedColor::new(0x2EBFD4, "Scooter"),
    NamedColor::new(0x2F270E, "Onion"),
    NamedColor::new(0x2F3CB3, "Governor Bay"),
    NamedColor::new(0x2F519E, "Sapphire"),
    NamedColor::new(0x2F5A57, "Spectra"),
    NamedColor::new(0x2F6168, "Casal"),
    NamedColor::new(0x300529, "Melanzane"),
    NamedColor::new(0x301F1E, "Cocoa Brown"),
    NamedColor::new(0x302A0F, "Woodrush"),
    NamedColor::new(0x304B6A, "San Juan"),
    NamedColor::new(0x30D5C8, "Turquoise"),
    NamedColor::new(0x311C17, "Eclipse"),
    NamedColor::new(0x314459, "Pickled Bluewood"),
    NamedColor::new(0x315BA1, "Azure"),
    NamedColor::new(0x31728D, "Calypso"),
    NamedColor::new(0x317D82, "Paradiso"),
    NamedColor::new(0x32127A, "Persian Indigo"),
    NamedColor::new(0x32293A, "Blackcurrant"),
    NamedColor::new(0x323232, "Mine Shaft"),
    NamedColor::new(0x325D52, "Stromboli"),
    NamedColor::new(0x327C14, "Bilbao"),
    NamedColor::new(0x327DA0, "Astral"),
    NamedColor::new(0x33036B, "Christalle"),
    NamedColor::new(0x33292F, "Thunder"),
    NamedColor::new(0x33CC99, "Shamrock"),
    NamedColor::new(0x341515, "Tamarind"),
    NamedColor::new(0x350036, "Mardi Gras"),
    NamedColor::new(0x350E42, "Valentino"),
    NamedColor::new(0x350E57, "Jagger"),
    NamedColor::new(0x353542, "Tuna"),
    NamedColor::new(0x354E8C, "Chambray"),
    NamedColor::new(0x363050, "Martinique"),
    NamedColor::new(0x363534, "Tuatara"),
    NamedColor::new(0x363C0D, "Waiouru"),
    NamedColor::new(0x36747D, "Ming"),
    NamedColor::new(0x368716, "La Palma"),
    NamedColor::new(0x370202, "Chocolate"),
    NamedColor::new(0x371D09, "Clinker"),
    NamedColor::new(0x37290E, "Brown Tumbleweed"),
    NamedColor::new(0x373021, "Birch"),
    NamedColor::new(0x377475, "Oracle"),
    NamedColor::new(0x380474, "Blue Diamond"),
    NamedColor::new(0x381A51, "Grape"),
    NamedColor::new(0x383533, "Dune"),
    NamedColor::new(0x384555, "Oxford Blue"),
    NamedColor::new(0x384910, "Clover"),
    NamedColor::new(0x394851, "Limed Spruce"),
    NamedColor::new(0x396413, "Dell"),
    NamedColor::new(0x3A0020, "Toledo"),
    NamedColor::new(0x3A2010, "Sambuca"),
    NamedColor::new(0x3A2A6A, "Jacarta"),
    NamedColor::new(0x3A686C, "William"),
    NamedColor::new(0x3A6A47, "Killarney"),
    NamedColor::new(0x3AB09E, "Keppel"),
    NamedColor::new(0x3B000B, "Temptress"),
    NamedColor::new(0x3B0910, "Aubergine"),
    NamedColor::new(0x3B1F1F, "Jon"),
    NamedColor::new(0x3B2820, "Treehouse"),
    NamedColor::new(0x3B7A57, "Amazon"),
    NamedColor::new(0x3B91B4, "Boston Blue"),
    NamedColor::new(0x3C0878, "Windsor"),
    NamedColor::new(0x3C1206, "Rebel"),
    NamedColor::new(0x3C1F76, "Meteorite"),
    NamedColor::new(0x3C2005, "Dark Ebony"),
    NamedColor::new(0x3C3910, "Camouflage"),
    NamedColor::new(0x3C4151, "Bright Gray"),
    NamedColor::new(0x3C4443, "Cape Cod"),
    NamedColor::new(0x3C493A, "Lunar Green"),
    NamedColor::new(0x3D0C02, "Bean"),
    NamedColor::new(0x3D2B1F, "Bistre"),
    NamedColor::new(0x3D7D52, "Goblin"),
    NamedColor::new(0x3E0480, "Kingfisher Daisy"),
    NamedColor::new(0x3E1C14, "Cedar"),
    NamedColor::new(0x3E2B23, "English Walnut"),
    NamedColor::new(0x3E2C1C, "Black Marlin"),
    NamedColor::new(0x3E3A44, "Ship Gray"),
    NamedColor::new(0x3EABBF, "Pelorous"),
    NamedColor::new(0x3F2109, "Bronze"),
    NamedColor::new(0x3F2500, "Cola"),
    NamedColor::new(0x3F3002, "Madras"),
    NamedColor::new(0x3F307F, "Minsk"),
    NamedColor::new(0x3F4C3A, "Cabbage Pont"),
    NamedColor::new(0x3F583B, "Tom Thumb"),
    NamedColor::new(0x3F5D53, "Mineral Green"),
    NamedColor::new(0x3FC1AA, "Puerto Rico"),
    NamedColor::new(0x3FFF00, "Harlequin"),
    NamedColor::new(0x401801, "Brown Pod"),
    NamedColor::new(0x40291D, "Cork"),
    NamedColor::new(0x403B38, "Masala"),
    NamedColor::new(0x403D19, "Thatch Green"),
    NamedColor::new(0x405169, "Fiord"),
    NamedColor::new(0x40826D, "Viridian"),
    NamedColor::new(0x40A860, "Chateau Green"),
    NamedColor::new(0x410056, "Ripe Plum"),
    NamedColor::new(0x411F10, "Paco"),
    NamedColor::new(0x412010, "Deep Oak"),
    NamedColor::new(0x413C37, "Merlin"),
    NamedColor::new(0x414257, "Gun Powder"),
    NamedColor::new(0x414C7D, "East Bay"),
    NamedColor::new(0x4169E1, "Royal Blue"),
    NamedColor::new(0x41AA78, "Ocean Green"),
    NamedColor::new(0x420303, "Burnt Maroon"),
    NamedColor::new(0x423921, "Lisbon Brown"),
    NamedColor::new(0x427977, "Faded Jade"),
    NamedColor::new(0x431560, "Scarlet Gum"),
    NamedColor::new(0x433120, "Iroko"),
    NamedColor::new(0x433E37, "Armadillo"),
    NamedColor::new(0x434C59, "River Bed"),
    NamedColor::new(0x436A0D, "Green Leaf"),
    NamedColor::new(0x44012D, "Barossa"),
    NamedColor::new(0x441D00, "Morocco Brown"),
    NamedColor::new(0x444954, "Mako"),
    NamedColor::new(0x454936, "Kelp"),
    NamedColor::new(0x456CAC, "San Marino"),
    NamedColor::new(0x45B1E8, "Picton Blue"),
    NamedColor::new(0x460B41, "Loulou"),
    NamedColor::new(0x462425, "Crater Brown"),
    NamedColor::new(0x465945, "Gray Asparagus"),
    NamedColor::new(0x4682B4, "Steel Blue"),
    NamedColor::new(0x480404, "Rustic Red"),
    NamedColor::new(0x480607, "Bulgarian Rose"),
    NamedColor::new(0x480656, "Clairvoyant"),
    NamedColor::new(0x481C1C, "Cocoa Bean"),
    NamedColor::new(0x483131, "Woody Brown"),
    NamedColor::new(0x483C32, "Taupe"),
    NamedColor::new(0x49170C, "Van Cleef"),
    NamedColor::new(0x492615, "Brown Derby"),
    NamedColor::new(0x49371B, "Metallic Bronze"),
    NamedColor::new(0x495400, "Verdun Green"),
    NamedColor::new(0x496679, "Blue Bayoux"),
    NamedColor::new(0x497183, "Bismark"),
    NamedColor::new(0x4A2A04, "Bracken"),
    NamedColor::new(0x4A3004, "Deep Bronze"),
    NamedColor::new(0x4A3C30, "Mondo"),
    NamedColor::new(0x4A4244, "Tundora"),
    NamedColor::new(0x4A444B, "Gravel"),
    NamedColor::new(0x4A4E5A, "Trout"),
    NamedColor::new(0x4B0082, "Pigment Indigo"),
    NamedColor::new(0x4B5D52, "Nandor"),
    NamedColor::new(0x4C3024, "Saddle"),
    NamedColor::new(0x4C4F56, "Abbey"),
    NamedColor::new(0x4D0135, "Blackberry"),
    NamedColor::new(0x4D0A18, "Cab Sav"),
    NamedColor::new(0x4D1E01, "Indian Tan"),
    NamedColor::new(0x4D282D, "Cowboy"),
    NamedColor::new(0x4D282E, "Livid Brown"),
    NamedColor::new(0x4D3833, "Rock"),
    NamedColor::new(0x4D3D14, "Punga"),
    NamedColor::new(0x4D400F, "Bronzetone"),
    NamedColor::new(0x4D5328, "Woodland"),
    NamedColor::new(0x4E0606, "Mahogany"),
    NamedColor::new(0x4E2A5A, "Bossanova"),
    NamedColor::new(0x4E3B41, "Matterhorn"),
    NamedColor::new(0x4E420C, "Bronze Olive"),
    NamedColor::new(0x4E4562, "Mulled Wine"),
    NamedColor::new(0x4E6649, "Axolotl"),
    NamedColor::new(0x4E7F9E, "Wedgewood"),
    NamedColor::new(0x4EABD1, "Shakespeare"),
    NamedColor::new(0x4F1C70, "Honey Flower"),
    NamedColor::new(0x4F2398, "Daisy Bush"),
    NamedColor::new(0x4F69C6, "Indigo"),
    NamedColor::new(0x4F7942, "Fern Green"),
    NamedColor::new(0x4F9D5D, "Fruit Salad"),
    NamedColor::new(0x4FA83D, "Apple"),
    NamedColor::new(0x504351, "Mortar"),
    NamedColor::new(0x507096, "Kashmir Blue"),
    NamedColor::new(0x507672, "Cutty Sark"),
    NamedColor::new(0x50C878, "Emerald"),
    NamedColor::new(0x514649, "Emperor"),
    NamedColor::new(0x516E3D, "Chalet Green"),
    NamedColor::new(0x517C66, "Como"),
    NamedColor::new(0x51808F, "Smalt Blue"),
    NamedColor::new(0x52001F, "Castro"),
    NamedColor::new(0x520C17, "Maroon Oak"),
    NamedColor::new(0x523C94, "Gigas"),
    NamedColor::new(0x533455, "Voodoo"),
    NamedColor::new(0x534491, "Victoria"),
    NamedColor::new(0x53824B, "Hippie Green"),
    NamedColor::new(0x541012, "Heath"),
    NamedColor::new(0x544333, "Judge Gray"),
    NamedColor::new(0x54534D, "Fuscous Gray"),
    NamedColor::new(0x549019, "Vida Loca"),
    NamedColor::new(0x55280C, "Cioccolato"),
    NamedColor::new(0x555B10, "Saratoga"),
    NamedColor::new(0x556D56, "Finlandia"),
    NamedColor::new(0x5590D9, "Havelock Blue"),
    NamedColor::new(0x56B4BE, "Fountain Blue"),
    NamedColor::new(0x578363, "Spring Leaves"),
    NamedColor::new(0x583401, "Saddle Brown"),
    NamedColor::new(0x585562, "Scarpa Flow"),
    NamedColor::new(0x587156, "Cactus"),
    NamedColor::new(0x589AAF, "Hippie Blue"),
    NamedColor::new(0x591D35, "Wine Berry"),
    NamedColor::new(0x592804, "Brown Bramble"),
    NamedColor::new(0x593737, "Congo Brown"),
    NamedColor::new(0x594433, "Millbrook"),
    NamedColor::new(0x5A6E9C, "Waikawa Gray"),
    NamedColor::new(0x5A87A0, "Horizon"),
    NamedColor::new(0x5B3013, "Jambalaya"),
    NamedColor::new(0x5C0120, "Bordeaux"),
    NamedColor::new(0x5C0536, "Mulberry Wood"),
    NamedColor::new(0x5C2E01, "Carnaby Tan"),
    NamedColor::new(0x5C5D75, "Comet"),
    NamedColor::new(0x5D1E0F, "Redwood"),
    NamedColor::new(0x5D4C51, "Don Juan"),
    NamedColor::new(0x5D5C58, "Chicago"),
    NamedColor::new(0x5D5E37, "Verdigris"),
    NamedColor::new(0x5D7747, "Dingley"),
    NamedColor::new(0x5DA19F, "Breaker Bay"),
    NamedColor::new(0x5E483E, "Kabul"),
    NamedColor::new(0x5E5D3B, "Hemlock"),
    NamedColor::new(0x5F3D26, "Irish Coffee"),
    NamedColor::new(0x5F5F6E, "Mid Gray"),
    NamedColor::new(0x5F6672, "Shuttle Gray"),
    NamedColor::new(0x5FA777, "Aqua Forest"),
    NamedColor::new(0x5FB3AC, "Tradewind"),
    NamedColor::new(0x604913, "Horses Neck"),
    NamedColor::new(0x605B73, "Smoky"),
    NamedColor::new(0x606E68, "Corduroy"),
    NamedColor::new(0x6093D1, "Danube"),
    NamedColor::new(0x612718, "Espresso"),
    NamedColor::new(0x614051, "Eggplant"),
    NamedColor::new(0x615D30, "Costa Del Sol"),
    NamedColor::new(0x61845F, "Glade Green"),
    NamedColor::new(0x622F30, "Buccaneer"),
    NamedColor::new(0x623F2D, "Quincy"),
    NamedColor::new(0x624E9A, "Butterfly Bush"),
    NamedColor::new(0x625119, "West Coast"),
    NamedColor::new(0x626649, "Finch"),
    NamedColor::new(0x639A8F, "Patina"),
    NamedColor::new(0x63B76C, "Fern"),
    NamedColor::new(0x6456B7, "Blue Violet"),
    NamedColor::new(0x646077, "Dolphin"),
    NamedColor::new(0x646463, "Storm Dust"),
    NamedColor::new(0x646A54, "Siam"),
    NamedColor::new(0x646E75, "Nevada"),
    NamedColor::new(0x6495ED, "Cornflower Blue"),
    NamedColor::new(0x64CCDB, "Viking"),
    NamedColor::new(0x65000B, "Rosewood"),
    NamedColor::new(0x651A14, "Cherrywood"),
    NamedColor::new(0x652DC1, "Purple Heart"),
    NamedColor::new(0x657220, "Fern Frond"),
    NamedColor::new(0x65745D, "Willow Grove"),
    NamedColor::new(0x65869F, "Hoki"),
    NamedColor::new(0x660045, "Pompadour"),
    NamedColor::new(0x660099, "Purple"),
    NamedColor::new(0x66023C, "Tyrian Purple"),
    NamedColor::new(0x661010, "Dark Tan"),
    NamedColor::new(0x66B58F, "Silver Tree"),
    NamedColor::new(0x66FF00, "Bright Green"),
    NamedColor::new(0x66FF66, "Screamin' Green"),
    NamedColor::new(0x67032D, "Black Rose"),
    NamedColor::new(0x675FA6, "Scampi"),
    NamedColor::new(0x676662, "Ironside Gray"),
    NamedColor::new(0x678975, "Viridian Green"),
    NamedColor::new(0x67A712, "Christi"),
    NamedColor::new(0x683600, "Nutmeg Wood Finish"),
    NamedColor::new(0x685558, "Zambezi"),
    NamedColor::new(0x685E6E, "Salt Box"),
    NamedColor::new(0x692545, "Tawny Port"),
    NamedColor::new(0x692D54, "Finn"),
    NamedColor::new(0x695F62, "Scorpion"),
    NamedColor::new(0x697E9A, "Lynch"),
    NamedColor::new(0x6A442E, "Spice"),
    NamedColor::new(0x6A5D1B, "Himalaya"),
    NamedColor::new(0x6A6051, "Soya Bean"),
    NamedColor::new(0x6B2A14, "Hairy Heath"),
    NamedColor::new(0x6B3FA0, "Royal Purple"),
    NamedColor::new(0x6B4E31, "Shingle Fawn"),
    NamedColor::new(0x6B5755, "Dorado"),
    NamedColor::new(0x6B8BA2, "Bermuda Gray"),
    NamedColor::new(0x6B8E23, "Olive Drab"),
    NamedColor::new(0x6C3082, "Eminence"),
    NamedColor::new(0x6CDAE7, "Turquoise Blue"),
    NamedColor::new(0x6D0101, "Lonestar"),
    NamedColor::new(0x6D5E54, "Pine Cone"),
    NamedColor::new(0x6D6C6C, "Dove Gray"),
    NamedColor::new(0x6D9292, "Juniper"),
    NamedColor::new(0x6D92A1, "Gothic"),
    NamedColor::new(0x6E0902, "Red Oxide"),
    NamedColor::new(0x6E1D14, "Moccaccino"),
    NamedColor::new(0x6E4826, "Pickled Bean"),
    NamedColor::new(0x6E4B26, "Dallas"),
    NamedColor::new(0x6E6D57, "Kokoda"),
    NamedColor::new(0x6E7783, "Pale Sky"),
    NamedColor::new(0x6F440C, "Cafe Royale"),
    NamedColor::new(0x6F6A61, "Flint"),
    NamedColor::new(0x6F8E63, "Highland"),
    NamedColor::new(0x6F9D02, "Limeade"),
    NamedColor::new(0x6FD0C5, "Downy"),
    NamedColor::new(0x701C1C, "Persian Plum"),
    NamedColor::new(0x704214, "Sepia"),
    NamedColor::new(0x704A07, "Antique Bronze"),
    NamedColor::new(0x704F50, "Ferra"),
    NamedColor::new(0x706555, "Coffee"),
    NamedColor::new(0x708090, "Slate Gray"),
    NamedColor::new(0x711A00, "Cedar Wood Finish"),
    NamedColor::new(0x71291D, "Metallic Copper"),
    NamedColor::new(0x714693, "Affair"),
    NamedColor::new(0x714AB2, "Studio"),
    NamedColor::new(0x715D47, "Tobacco Brown"),
    NamedColor::new(0x716338, "Yellow Metal"),
    NamedColor::new(0x716B56, "Peat"),
    NamedColor::new(0x716E10, "Olivetone"),
    NamedColor::new(0x717486, "Storm Gray"),
    NamedColor::new(0x718080, "Sirocco"),
    NamedColor::new(0x71D9E2, "Aquamarine Blue"),
    NamedColor::new(0x72010F, "Venetian Red"),
    NamedColor::new(0x724A2F, "Old Copper"),
    NamedColor::new(0x726D4E, "Go Ben"),
    NamedColor::new(0x727B89, "Raven"),
    NamedColor::new(0x731E8F, "Seance"),
    NamedColor::new(0x734A12, "Raw Umber"),
    NamedColor::new(0x736C9F, "Kimberly"),
    NamedColor::new(0x736D58, "Crocodile"),
    NamedColor::new(0x737829, "Crete"),
    NamedColor::new(0x738678, "Xanadu"),
    NamedColor::new(0x74640D, "Spicy Mustard"),
    NamedColor::new(0x747D63, "Limed Ash"),
    NamedColor::new(0x747D83, "Rolling Stone"),
    NamedColor::new(0x748881, "Blue Smoke"),
    NamedColor::new(0x749378, "Laurel"),
    NamedColor::new(0x74C365, "Mantis"),
    NamedColor::new(0x755A57, "Russett"),
    NamedColor::new(0x7563A8, "Deluge"),
    NamedColor::new(0x76395D, "Cosmic"),
    NamedColor::new(0x7666C6, "Blue Marguerite"),
    NamedColor::new(0x76BD17, "Lima"),
    NamedColor::new(0x76D7EA, "Sky Blue"),
    NamedColor::new(0x770F05, "Dark Burgundy"),
    NamedColor::new(0x771F1F, "Crown of Thorns"),
    NamedColor::new(0x773F1A, "Walnut"),
    NamedColor::new(0x776F61, "Pablo"),
    NamedColor::new(0x778120, "Pacifika"),
    NamedColor::new(0x779E86, "Oxley"),
    NamedColor::new(0x77DD77, "Pastel Green"),
    NamedColor::new(0x780109, "Japanese Maple"),
    NamedColor::new(0x782D19, "Mocha"),
    NamedColor::new(0x782F16, "Peanut"),
    NamedColor::new(0x78866B, "Camouflage Green"),
    NamedColor::new(0x788A25, "Wasabi"),
    NamedColor::new(0x788BBA, "Ship Cove"),
    NamedColor::new(0x78A39C, "Sea Nymph"),
    NamedColor::new(0x795D4C, "Roman Coffee"),
    NamedColor::new(0x796878, "Old Lavender"),
    NamedColor::new(0x796989, "Rum"),
    NamedColor::new(0x796A78, "Fedora"),
    NamedColor::new(0x796D62, "Sandstone"),
    NamedColor::new(0x79DEEC, "Spray"),
    NamedColor::new(0x7A013A, "Siren"),
    NamedColor::new(0x7A58C1, "Fuchsia Blue"),
    NamedColor::new(0x7A7A7A, "Boulder"),
    NamedColor::new(0x7A89B8, "Wild Blue Yonder"),
    NamedColor::new(0x7AC488, "De York"),
    NamedColor::new(0x7B3801, "Red Beech"),
    NamedColor::new(0x7B3F00, "Cinnamon"),
    NamedColor::new(0x7B6608, "Yukon Gold"),
    NamedColor::new(0x7B7874, "Tapa"),
    NamedColor::new(0x7B7C94, "Waterloo"),
    NamedColor::new(0x7B8265, "Flax Smoke"),
    NamedColor::new(0x7B9F80, "Amulet"),
    NamedColor::new(0x7BA05B, "Asparagus"),
    NamedColor::new(0x7C1C05, "Kenyan Copper"),
    NamedColor::new(0x7C7631, "Pesto"),
    NamedColor::new(0x7C778A, "Topaz"),
    NamedColor::new(0x7C7B7A, "Concord"),
    NamedColor::new(0x7C7B82, "Jumbo"),
    NamedColor::new(0x7C881A, "Trendy Green"),
    NamedColor::new(0x7CA1A6, "Gumbo"),
    NamedColor::new(0x7CB0A1, "Acapulco"),
    NamedColor::new(0x7CB7BB, "Neptune"),
    NamedColor::new(0x7D2C14, "Pueblo"),
    NamedColor::new(0x7DA98D, "Bay Leaf"),
    NamedColor::new(0x7DC8F7, "Malibu"),
    NamedColor::new(0x7DD8C6, "Bermuda"),
    NamedColor::new(0x7E3A15, "Copper Canyon"),
    NamedColor::new(0x7F1734, "Claret"),
    NamedColor::new(0x7F3A02, "Peru Tan"),
    NamedColor::new(0x7F626D, "Falcon"),
    NamedColor::new(0x7F7589, "Mobster"),
    NamedColor::new(0x7F76D3, "Moody Blue"),
    NamedColor::new(0x7FFF00, "Chartreuse"),
    NamedColor::new(0x7FFFD4, "Aquamarine"),
    NamedColor::new(0x800000, "Maroon"),
    NamedColor::new(0x800B47, "Rose Bud Cherry"),
    NamedColor::new(0x801818, "Falu Red"),
    NamedColor::new(0x80341F, "Red Robin"),
    NamedColor::new(0x803790, "Vivid Violet"),
    NamedColor::new(0x80461B, "Russet"),
    NamedColor::new(0x807E79, "Friar Gray"),
    NamedColor::new(0x808000, "Olive"),
    NamedColor::new(0x808080, "Gray"),
    NamedColor::new(0x80B3AE, "Gulf Stream"),
    NamedColor::new(0x80B3C4, "Glacier"),
    NamedColor::new(0x80CCEA, "Seagull"),
    NamedColor::new(0x81422C, "Nutmeg"),
    NamedColor::new(0x816E71, "Spicy Pink"),
    NamedColor::new(0x817377, "Empress"),
    NamedColor::new(0x819885, "Spanish Green"),
    NamedColor::new(0x826F65, "Sand Dune"),
    NamedColor::new(0x828685, "Gunsmoke"),
    NamedColor::new(0x828F72, "Battleship Gray"),
    NamedColor::new(0x831923, "Merlot"),
    NamedColor::new(0x837050, "Shadow"),
    NamedColor::new(0x83AA5D, "Chelsea Cucumber"),
    NamedColor::new(0x83D0C6, "Monte Carlo"),
    NamedColor::new(0x843179, "Plum"),
    NamedColor::new(0x84A0A0, "Granny Smith"),
    NamedColor::new(0x8581D9, "Chetwode Blue"),
    NamedColor::new(0x858470, "Bandicoot"),
    NamedColor::new(0x859FAF, "Bali Hai"),
    NamedColor::new(0x85C4CC, "Half Baked"),
    NamedColor::new(0x860111, "Red Devil"),
    NamedColor::new(0x863C3C, "Lotus"),
    NamedColor::new(0x86483C, "Ironstone"),
    NamedColor::new(0x864D1E, "Bull Shot"),
    NamedColor::new(0x86560A, "Rusty Nail"),
    NamedColor::new(0x868974, "Bitter"),
    NamedColor::new(0x86949F, "Regent Gray"),
    NamedColor::new(0x871550, "Disco"),
    NamedColor::new(0x87756E, "Americano"),
    NamedColor::new(0x877C7B, "Hurricane"),
    NamedColor::new(0x878D91, "Oslo Gray"),
    NamedColor::new(0x87AB39, "Sushi"),
    NamedColor::new(0x885342, "Spicy Mix"),
    NamedColor::new(0x886221, "Kumera"),
    NamedColor::new(0x888387, "Suva Gray"),
    NamedColor::new(0x888D65, "Avocado"),
    NamedColor::new(0x893456, "Camelot"),
    NamedColor::new(0x893843, "Solid Pink"),
    NamedColor::new(0x894367, "Cannon Pink"),
    NamedColor::new(0x897D6D, "Makara"),
    NamedColor::new(0x8A3324, "Burnt Umber"),
    NamedColor::new(0x8A73D6, "True V"),
    NamedColor::new(0x8A8360, "Clay Creek"),
    NamedColor::new(0x8A8389, "Monsoon"),
    NamedColor::new(0x8A8F8A, "Stack"),
    NamedColor::new(0x8AB9F1, "Jordy Blue"),
    NamedColor::new(0x8B00FF, "Electric Violet"),
    NamedColor::new(0x8B0723, "Monarch"),
    NamedColor::new(0x8B6B0B, "Corn Harvest"),
    NamedColor::new(0x8B8470, "Olive Haze"),
    NamedColor::new(0x8B847E, "Schooner"),
    NamedColor::new(0x8B8680, "Natural Gray"),
    NamedColor::new(0x8B9C90, "Mantle"),
    NamedColor::new(0x8B9FEE, "Portage"),
    NamedColor::new(0x8BA690, "Envy"),
    NamedColor::new(0x8BA9A5, "Cascade"),
    NamedColor::new(0x8BE6D8, "Riptide"),
    NamedColor::new(0x8C055E, "Cardinal Pink"),
    NamedColor::new(0x8C472F, "Mule Fawn"),
    NamedColor::new(0x8C5738, "Potters Clay"),
    NamedColor::new(0x8C6495, "Trendy Pink"),
    NamedColor::new(0x8D0226, "Paprika"),
    NamedColor::new(0x8D3D38, "Sanguine Brown"),
    NamedColor::new(0x8D3F3F, "Tosca"),
    NamedColor::new(0x8D7662, "Cement"),
    NamedColor::new(0x8D8974, "Granite Green"),
    NamedColor::new(0x8D90A1, "Manatee"),
    NamedColor::new(0x8DA8CC, "Polo Blue"),
    NamedColor::new(0x8E0000, "Red Berry"),
    NamedColor::new(0x8E4D1E, "Rope"),
    NamedColor::new(0x8E6F70, "Opium"),
    NamedColor::new(0x8E775E, "Domino"),
    NamedColor::new(0x8E8190, "Mamba"),
    NamedColor::new(0x8EABC1, "Nepal"),
    NamedColor::new(0x8F021C, "Pohutukawa"),
    NamedColor::new(0x8F3E33, "El Salva"),
    NamedColor::new(0x8F4B0E, "Korma"),
    NamedColor::new(0x8F8176, "Squirrel"),
    NamedColor::new(0x8FD6B4, "Vista Blue"),
    NamedColor::new(0x900020, "Burgundy"),
    NamedColor::new(0x901E1E, "Old Brick"),
    NamedColor::new(0x907874, "Hemp"),
    NamedColor::new(0x907B71, "Almond Frost"),
    NamedColor::new(0x908D39, "Sycamore"),
    NamedColor::new(0x92000A, "Sangria"),
    NamedColor::new(0x924321, "Cumin"),
    NamedColor::new(0x926F5B, "Beaver"),
    NamedColor::new(0x928573, "Stonewall"),
    NamedColor::new(0x928590, "Venus"),
    NamedColor::new(0x9370DB, "Medium Purple"),
    NamedColor::new(0x93CCEA, "Cornflower"),
    NamedColor::new(0x93DFB8, "Algae Green"),
    NamedColor::new(0x944747, "Copper Rust"),
    NamedColor::new(0x948771, "Arrowtown"),
    NamedColor::new(0x950015, "Scarlett"),
    NamedColor::new(0x956387, "Strikemaster"),
    NamedColor::new(0x959396, "Mountain Mist"),
    NamedColor::new(0x960018, "Carmine"),
    NamedColor::new(0x964B00, "Brown"),
    NamedColor::new(0x967059, "Leather"),
    NamedColor::new(0x9678B6, "Purple Mountain's Majesty"),
    NamedColor::new(0x967BB6, "Lavender Purple"),
    NamedColor::new(0x96A8A1, "Pewter"),
    NamedColor::new(0x96BBAB, "Summer Green"),
    NamedColor::new(0x97605D, "Au Chico"),
    NamedColor::new(0x9771B5, "Wisteria"),
    NamedColor::new(0x97CD2D, "Atlantis"),
    NamedColor::new(0x983D61, "Vin Rouge"),
    NamedColor::new(0x9874D3, "Lilac Bush"),
    NamedColor::new(0x98777B, "Bazaar"),
    NamedColor::new(0x98811B, "Hacienda"),
    NamedColor::new(0x988D77, "Pale Oyster"),
    NamedColor::new(0x98FF98, "Mint Green"),
    NamedColor::new(0x990066, "Fresh Eggplant"),
    NamedColor::new(0x991199, "Violet Eggplant"),
    NamedColor::new(0x991613, "Tamarillo"),
    NamedColor::new(0x991B07, "Totem Pole"),
    NamedColor::new(0x996666, "Copper Rose"),
    NamedColor::new(0x9966CC, "Amethyst"),
    NamedColor::new(0x997A8D, "Mountbatten Pink"),
    NamedColor::new(0x9999CC, "Blue Bell"),
    NamedColor::new(0x9A3820, "Prairie Sand"),
    NamedColor::new(0x9A6E61, "Toast"),
    NamedColor::new(0x9A9577, "Gurkha"),
    NamedColor::new(0x9AB973, "Olivine"),
    NamedColor::new(0x9AC2B8, "Shadow Green"),
    NamedColor::new(0x9B4703, "Oregon"),
    NamedColor::new(0x9B9E8F, "Lemon Grass"),
    NamedColor::new(0x9C3336, "Stiletto"),
    NamedColor::new(0x9D5616, "Hawaiian Tan"),
    NamedColor::new(0x9DACB7, "Gull Gray"),
    NamedColor::new(0x9DC209, "Pistachio"),
    NamedColor::new(0x9DE093, "Granny Smith Apple"),
    NamedColor::new(0x9DE5FF, "Anakiwa"),
    NamedColor::new(0x9E5302, "Chelsea Gem"),
    NamedColor::new(0x9E5B40, "Sepia Skin"),
    NamedColor::new(0x9EA587, "Sage"),
    NamedColor::new(0x9EA91F, "Citron"),
    NamedColor::new(0x9EB1CD, "Rock Blue"),
    NamedColor::new(0x9EDEE0, "Morning Glory"),
    NamedColor::new(0x9F381D, "Cognac"),
    NamedColor::new(0x9F821C, "Reef Gold"),
    NamedColor::new(0x9F9F9C, "Star Dust"),
    NamedColor::new(0x9FA0B1, "Santas Gray"),
    NamedColor::new(0x9FD7D3, "Sinbad"),
    NamedColor::new(0x9FDD8C, "Feijoa"),
    NamedColor::new(0xA02712, "Tabasco"),
    NamedColor::new(0xA1750D, "Buttered Rum"),
    NamedColor::new(0xA1ADB5, "Hit Gray"),
    NamedColor::new(0xA1C50A, "Citrus"),
    NamedColor::new(0xA1DAD7, "Aqua Island"),
    NamedColor::new(0xA1E9DE, "Water Leaf"),
    NamedColor::new(0xA2006D, "Flirt"),
    NamedColor::new(0xA23B6C, "Rouge"),
    NamedColor::new(0xA26645, "Cape Palliser"),
    NamedColor::new(0xA2AAB3, "Gray Chateau"),
    NamedColor::new(0xA2AEAB, "Edward"),
    NamedColor::new(0xA3807B, "Pharlap"),
    NamedColor::new(0xA397B4, "Amethyst Smoke"),
    NamedColor::new(0xA3E3ED, "Blizzard Blue"),
    NamedColor::new(0xA4A49D, "Delta"),
    NamedColor::new(0xA4A6D3, "Wistful"),
    NamedColor::new(0xA4AF6E, "Green Smoke"),
    NamedColor::new(0xA50B5E, "Jazzberry Jam"),
    NamedColor::new(0xA59B91, "Zorba"),
    NamedColor::new(0xA5CB0C, "Bahia"),
    NamedColor::new(0xA62F20, "Roof Terracotta"),
    NamedColor::new(0xA65529, "Paarl"),
    NamedColor::new(0xA68B5B, "Barley Corn"),
    NamedColor::new(0xA69279, "Donkey Brown"),
    NamedColor::new(0xA6A29A, "Dawn"),
    NamedColor::new(0xA72525, "Mexican Red"),
    NamedColor::new(0xA7882C, "Luxor Gold"),
    NamedColor::new(0xA85307, "Rich Gold"),
    NamedColor::new(0xA86515, "Reno Sand"),
    NamedColor::new(0xA86B6B, "Coral Tree"),
    NamedColor::new(0xA8989B, "Dusty Gray"),
    NamedColor::new(0xA899E6, "Dull Lavender"),
    NamedColor::new(0xA8A589, "Tallow"),
    NamedColor::new(0xA8AE9C, "Bud"),
    NamedColor::new(0xA8AF8E, "Locust"),
    NamedColor::new(0xA8BD9F, "Norway"),
    NamedColor::new(0xA8E3BD, "Chinook"),
    NamedColor::new(0xA9A491, "Gray Olive"),
    NamedColor::new(0xA9ACB6, "Aluminium"),
    NamedColor::new(0xA9B2C3, "Cadet Blue"),
    NamedColor::new(0xA9B497, "Schist"),
    NamedColor::new(0xA9BDBF, "Tower Gray"),
    NamedColor::new(0xA9BEF2, "Perano"),
    NamedColor::new(0xA9C6C2, "Opal"),
    NamedColor::new(0xAA375A, "Night Shadz"),
    NamedColor::new(0xAA4203, "Fire"),
    NamedColor::new(0xAA8B5B, "Muesli"),
    NamedColor::new(0xAA8D6F, "Sandal"),
    NamedColor::new(0xAAA5A9, "Shady Lady"),
    NamedColor::new(0xAAA9CD, "Logan"),
    NamedColor::new(0xAAABB7, "Spun Pearl"),
    NamedColor::new(0xAAD6E6, "Regent St Blue"),
    NamedColor::new(0xAAF0D1, "Magic Mint"),
    NamedColor::new(0xAB0563, "Lipstick"),
    NamedColor::new(0xAB3472, "Royal Heath"),
    NamedColor::new(0xAB917A, "Sandrift"),
    NamedColor::new(0xABA0D9, "Cold Purple"),
    NamedColor::new(0xABA196, "Bronco"),
    NamedColor::new(0xAC8A56, "Limed Oak"),
    NamedColor::new(0xAC91CE, "East Side"),
    NamedColor::new(0xAC9E22, "Lemon Ginger"),
    NamedColor::new(0xACA494, "Napa"),
    NamedColor::new(0xACA586, "Hillary"),
    NamedColor::new(0xACA59F, "Cloudy"),
    NamedColor::new(0xACACAC, "Silver Chalice"),
    NamedColor::new(0xACB78E, "Swamp Green"),
    NamedColor::new(0xACCBB1, "Spring Rain"),
    NamedColor::new(0xACDD4D, "Conifer"),
    NamedColor::new(0xACE1AF, "Celadon"),
    NamedColor::new(0xAD781B, "Mandalay"),
    NamedColor::new(0xADBED1, "Casper"),
    NamedColor::new(0xADDFAD, "Moss Green"),
    NamedColor::new(0xADE6C4, "Padua"),
    NamedColor::new(0xADFF2F, "Green Yellow"),
    NamedColor::new(0xAE4560, "Hippie Pink"),
    NamedColor::new(0xAE6020, "Desert"),
    NamedColor::new(0xAE809E, "Bouquet"),
    NamedColor::new(0xAF4035, "Medium Carmine"),
    NamedColor::new(0xAF4D43, "Apple Blossom"),
    NamedColor::new(0xAF593E, "Brown Rust"),
    NamedColor::new(0xAF8751, "Driftwood"),
    NamedColor::new(0xAF8F2C, "Alpine"),
    NamedColor::new(0xAF9F1C, "Lucky"),
    NamedColor::new(0xAFA09E, "Martini"),
    NamedColor::new(0xAFB1B8, "Bombay"),
    NamedColor::new(0xAFBDD9, "Pigeon Post"),
    NamedColor::new(0xB04C6A, "Cadillac"),
    NamedColor::new(0xB05D54, "Matrix"),
    NamedColor::new(0xB05E81, "Tapestry"),
    NamedColor::new(0xB06608, "Mai Tai"),
    NamedColor::new(0xB09A95, "Del Rio"),
    NamedColor::new(0xB0E0E6, "Powder Blue"),
    NamedColor::new(0xB0E313, "Inch Worm"),
    NamedColor::new(0xB10000, "Bright Red"),
    NamedColor::new(0xB14A0B, "Vesuvius"),
    NamedColor::new(0xB1610B, "Pumpkin Skin"),
    NamedColor::new(0xB16D52, "Santa Fe"),
    NamedColor::new(0xB19461, "Teak"),
    NamedColor::new(0xB1E2C1, "Fringy Flower"),
    NamedColor::new(0xB1F4E7, "Ice Cold"),
    NamedColor::new(0xB20931, "Shiraz"),
    NamedColor::new(0xB2A1EA, "Biloba Flower"),
    NamedColor::new(0xB32D29, "Tall Poppy"),
    NamedColor::new(0xB35213, "Fiery Orange"),
    NamedColor::new(0xB38007, "Hot Toddy"),
    NamedColor::new(0xB3AF95, "Taupe Gray"),
    NamedColor::new(0xB3C110, "La Rioja"),
    NamedColor::new(0xB43332, "Well Read"),
    NamedColor::new(0xB44668, "Blush"),
    NamedColor::new(0xB4CFD3, "Jungle Mist"),
    NamedColor::new(0xB57281, "Turkish Rose"),
    NamedColor::new(0xB57EDC, "Lavender"),
    NamedColor::new(0xB5A27F, "Mongoose"),
    NamedColor::new(0xB5B35C, "Olive Green"),
    NamedColor::new(0xB5D2CE, "Jet Stream"),
    NamedColor::new(0xB5ECDF, "Cruise"),
    NamedColor::new(0xB6316C, "Hibiscus"),
    NamedColor::new(0xB69D98, "Thatch"),
    NamedColor::new(0xB6B095, "Heathered Gray"),
    NamedColor::new(0xB6BAA4, "Eagle"),
    NamedColor::new(0xB6D1EA, "Spindle"),
    NamedColor::new(0xB6D3BF, "Gum Leaf"),
    NamedColor::new(0xB7410E, "Rust"),
    NamedColor::new(0xB78E5C, "Muddy Waters"),
    NamedColor::new(0xB7A214, "Sahara"),
    NamedColor::new(0xB7A458, "Husk"),
    NamedColor::new(0xB7B1B1, "Nobel"),
    NamedColor::new(0xB7C3D0, "Heather"),
    NamedColor::new(0xB7F0BE, "Madang"),
    NamedColor::new(0xB81104, "Milano Red"),
    NamedColor::new(0xB87333, "Copper"),
    NamedColor::new(0xB8B56A, "Gimblet"),
    NamedColor::new(0xB8C1B1, "Green Spring"),
    NamedColor::new(0xB8C25D, "Celery"),
    NamedColor::new(0xB8E0F9, "Sail"),
    NamedColor::new(0xB94E48, "Chestnut"),
    NamedColor::new(0xB95140, "Crail"),
    NamedColor::new(0xB98D28, "Marigold"),
    NamedColor::new(0xB9C46A, "Wild Willow"),
    NamedColor::new(0xB9C8AC, "Rainee"),
    NamedColor::new(0xBA0101, "Guardsman Red"),
    NamedColor::new(0xBA450C, "Rock Spray"),
    NamedColor::new(0xBA6F1E, "Bourbon"),
    NamedColor::new(0xBA7F03, "Pirate Gold"),
    NamedColor::new(0xBAB1A2, "Nomad"),
    NamedColor::new(0xBAC7C9, "Submarine"),
    NamedColor::new(0xBAEEF9, "Charlotte"),
    NamedColor::new(0xBB3385, "Medium Red Violet"),
    NamedColor::new(0xBB8983, "Brandy Rose"),
    NamedColor::new(0xBBD009, "Rio Grande"),
    NamedColor::new(0xBBD7C1, "Surf"),
    NamedColor::new(0xBCC9C2, "Powder Ash"),
    NamedColor::new(0xBD5E2E, "Tuscany"),
    NamedColor::new(0xBD978E, "Quicksand"),
    NamedColor::new(0xBDB1A8, "Silk"),
    NamedColor::new(0xBDB2A1, "Malta"),
    NamedColor::new(0xBDB3C7, "Chatelle"),
    NamedColor::new(0xBDBBD7, "Lavender Gray"),
    NamedColor::new(0xBDBDC6, "French Gray"),
    NamedColor::new(0xBDC8B3, "Clay Ash"),
    NamedColor::new(0xBDC9CE, "Loblolly"),
    NamedColor::new(0xBDEDFD, "French Pass"),
    NamedColor::new(0xBEA6C3, "London Hue"),
    NamedColor::new(0xBEB5B7, "Pink Swan"),
    NamedColor::new(0xBEDE0D, "Fuego"),
    NamedColor::new(0xBF5500, "Rose of Sharon"),
    NamedColor::new(0xBFB8B0, "Tide"),
    NamedColor::new(0xBFBED8, "Blue Haze"),
    NamedColor::new(0xBFC1C2, "Silver Sand"),
    NamedColor::new(0xBFC921, "Key Lime Pie"),
    NamedColor::new(0xBFDBE2, "Ziggurat"),
    NamedColor::new(0xBFFF00, "Lime"),
    NamedColor::new(0xC02B18, "Thunderbird"),
    NamedColor::new(0xC04737, "Mojo"),
    NamedColor::new(0xC08081, "Old Rose"),
    NamedColor::new(0xC0C0C0, "Silver"),
    NamedColor::new(0xC0D3B9, "Pale Leaf"),
    NamedColor::new(0xC0D8B6, "Pixie Green"),
    NamedColor::new(0xC1440E, "Tia Maria"),
    NamedColor::new(0xC154C1, "Fuchsia Pink"),
    NamedColor::new(0xC1A004, "Buddha Gold"),
    NamedColor::new(0xC1B7A4, "Bison Hide"),
    NamedColor::new(0xC1BAB0, "Tea"),
    NamedColor::new(0xC1BECD, "Gray Suit"),
    NamedColor::new(0xC1D7B0, "Sprout"),
    NamedColor::new(0xC1F07C, "Sulu"),
    NamedColor::new(0xC26B03, "Indochine"),
    NamedColor::new(0xC2955D, "Twine"),
    NamedColor::new(0xC2BDB6, "Cotton Seed"),
    NamedColor::new(0xC2CAC4, "Pumice"),
    NamedColor::new(0xC2E8E5, "Jagged Ice"),
    NamedColor::new(0xC32148, "Maroon Flush"),
    NamedColor::new(0xC3B091, "Indian Khaki"),
    NamedColor::new(0xC3BFC1, "Pale Slate"),
    NamedColor::new(0xC3C3BD, "Gray Nickel"),
    NamedColor::new(0xC3CDE6, "Periwinkle Gray"),
    NamedColor::new(0xC3D1D1, "Tiara"),
    NamedColor::new(0xC3DDF9, "Tropical Blue"),
    NamedColor::new(0xC41E3A, "Cardinal"),
    NamedColor::new(0xC45655, "Fuzzy Wuzzy Brown"),
    NamedColor::new(0xC45719, "Orange Roughy"),
    NamedColor::new(0xC4C4BC, "Mist Gray"),
    NamedColor::new(0xC4D0B0, "Coriander"),
    NamedColor::new(0xC4F4EB, "Mint Tulip"),
    NamedColor::new(0xC54B8C, "Mulberry"),
    NamedColor::new(0xC59922, "Nugget"),
    NamedColor::new(0xC5994B, "Tussock"),
    NamedColor::new(0xC5DBCA, "Sea Mist"),
    NamedColor::new(0xC5E17A, "Yellow Green"),
    NamedColor::new(0xC62D42, "Brick Red"),
    NamedColor::new(0xC6726B, "Contessa"),
    NamedColor::new(0xC69191, "Oriental Pink"),
    NamedColor::new(0xC6A84B, "Roti"),
    NamedColor::new(0xC6C3B5, "Ash"),
    NamedColor::new(0xC6C8BD, "Kangaroo"),
    NamedColor::new(0xC6E610, "Las Palmas"),
    NamedColor::new(0xC7031E, "Monza"),
    NamedColor::new(0xC71585, "Red Violet"),
    NamedColor::new(0xC7BCA2, "Coral Reef"),
    NamedColor::new(0xC7C1FF, "Melrose"),
    NamedColor::new(0xC7C4BF, "Cloud"),
    NamedColor::new(0xC7C9D5, "Ghost"),
    NamedColor::new(0xC7CD90, "Pine Glade"),
    NamedColor::new(0xC7DDE5, "Botticelli"),
    NamedColor::new(0xC88A65, "Antique Brass"),
    NamedColor::new(0xC8A2C8, "Lilac"),
    NamedColor::new(0xC8A528, "Hokey Pokey"),
    NamedColor::new(0xC8AABF, "Lily"),
    NamedColor::new(0xC8B568, "Laser"),
    NamedColor::new(0xC8E3D7, "Edgewater"),
    NamedColor::new(0xC96323, "Piper"),
    NamedColor::new(0xC99415, "Pizza"),
    NamedColor::new(0xC9A0DC, "Light Wisteria"),
    NamedColor::new(0xC9B29B, "Rodeo Dust"),
    NamedColor::new(0xC9B35B, "Sundance"),
    NamedColor::new(0xC9B93B, "Earls Green"),
    NamedColor::new(0xC9C0BB, "Silver Rust"),
    NamedColor::new(0xC9D9D2, "Conch"),
    NamedColor::new(0xC9FFA2, "Reef"),
    NamedColor::new(0xC9FFE5, "Aero Blue"),
    NamedColor::new(0xCA3435, "Flush Mahogany"),
    NamedColor::new(0xCABB48, "Turmeric"),
    NamedColor::new(0xCADCD4, "Paris White"),
    NamedColor::new(0xCAE00D, "Bitter Lemon"),
    NamedColor::new(0xCAE6DA, "Skeptic"),
    NamedColor::new(0xCB8FA9, "Viola"),
    NamedColor::new(0xCBCAB6, "Foggy Gray"),
    NamedColor::new(0xCBD3B0, "Green Mist"),
    NamedColor::new(0xCBDBD6, "Nebula"),
    NamedColor::new(0xCC3333, "Persian Red"),
    NamedColor::new(0xCC5500, "Burnt Orange"),
    NamedColor::new(0xCC7722, "Ochre"),
    NamedColor::new(0xCC8899, "Puce"),
    NamedColor::new(0xCCCAA8, "Thistle Green"),
    NamedColor::new(0xCCCCFF, "Periwinkle"),
    NamedColor::new(0xCCFF00, "Electric Lime"),
    NamedColor::new(0xCD5700, "Tenn"),
    NamedColor::new(0xCD5C5C, "Chestnut Rose"),
    NamedColor::new(0xCD8429, "Brandy Punch"),
    NamedColor::new(0xCDF4FF, "Onahau"),
    NamedColor::new(0xCEB98F, "Sorrell Brown"),
    NamedColor::new(0xCEBABA, "Cold Turkey"),
    NamedColor::new(0xCEC291, "Yuma"),
    NamedColor::new(0xCEC7A7, "Chino"),
    NamedColor::new(0xCFA39D, "Eunry"),
    NamedColor::new(0xCFB53B, "Old Gold"),
    NamedColor::new(0xCFDCCF, "Tasman"),
    NamedColor::new(0xCFE5D2, "Surf Crest"),
    NamedColor::new(0xCFF9F3, "Humming Bird"),
    NamedColor::new(0xCFFAF4, "Scandal"),
    NamedColor::new(0xD05F04, "Red Stage"),
    NamedColor::new(0xD06DA1, "Hopbush"),
    NamedColor::new(0xD07D12, "Meteor"),
    NamedColor::new(0xD0BEF8, "Perfume"),
    NamedColor::new(0xD0C0E5, "Prelude"),
    NamedColor::new(0xD0F0C0, "Tea Green"),
    NamedColor::new(0xD18F1B, "Geebung"),
    NamedColor::new(0xD1BEA8, "Vanilla"),
    NamedColor::new(0xD1C6B4, "Soft Amber"),
    NamedColor::new(0xD1D2CA, "Celeste"),
    NamedColor::new(0xD1D2DD, "Mischka"),
    NamedColor::new(0xD1E231, "Pear"),
    NamedColor::new(0xD2691E, "Hot Cinnamon"),
    NamedColor::new(0xD27D46, "Raw Sienna"),
    NamedColor::new(0xD29EAA, "Careys Pink"),
    NamedColor::new(0xD2B48C, "Tan"),
    NamedColor::new(0xD2DA97, "Deco"),
    NamedColor::new(0xD2F6DE, "Blue Romance"),
    NamedColor::new(0xD2F8B0, "Gossip"),
    NamedColor::new(0xD3CBBA, "Sisal"),
    NamedColor::new(0xD3CDC5, "Swirl"),
    NamedColor::new(0xD47494, "Charm"),
    NamedColor::new(0xD4B6AF, "Clam Shell"),
    NamedColor::new(0xD4BF8D, "Straw"),
    NamedColor::new(0xD4C4A8, "Akaroa"),
    NamedColor::new(0xD4CD16, "Bird Flower"),
    NamedColor::new(0xD4D7D9, "Iron"),
    NamedColor::new(0xD4DFE2, "Geyser"),
    NamedColor::new(0xD4E2FC, "Hawkes Blue"),
    NamedColor::new(0xD54600, "Grenadier"),
    NamedColor::new(0xD591A4, "Can Can"),
    NamedColor::new(0xD59A6F, "Whiskey"),
    NamedColor::new(0xD5D195, "Winter Hazel"),
    NamedColor::new(0xD5F6E3, "Granny Apple"),
    NamedColor::new(0xD69188, "My Pink"),
    NamedColor::new(0xD6C562, "Tacha"),
    NamedColor::new(0xD6CEF6, "Moon Raker"),
    NamedColor::new(0xD6D6D1, "Quill Gray"),
    NamedColor::new(0xD6FFDB, "Snowy Mint"),
    NamedColor::new(0xD7837F, "New York Pink"),
    NamedColor::new(0xD7C498, "Pavlova"),
    NamedColor::new(0xD7D0FF, "Fog"),
    NamedColor::new(0xD84437, "Valencia"),
    NamedColor::new(0xD87C63, "Japonica"),
    NamedColor::new(0xD8BFD8, "Thistle"),
    NamedColor::new(0xD8C2D5, "Maverick"),
    NamedColor::new(0xD8FCFA, "Foam"),
    NamedColor::new(0xD94972, "Cabaret"),
    NamedColor::new(0xD99376, "Burning Sand"),
    NamedColor::new(0xD9B99B, "Cameo"),
    NamedColor::new(0xD9D6CF, "Timberwolf"),
    NamedColor::new(0xD9DCC1, "Tana"),
    NamedColor::new(0xD9E4F5, "Link Water"),
    NamedColor::new(0xD9F7FF, "Mabel"),
    NamedColor::new(0xDA3287, "Cerise"),
    NamedColor::new(0xDA5B38, "Flame Pea"),
    NamedColor::new(0xDA6304, "Bamboo"),
    NamedColor::new(0xDA6A41, "Red Damask"),
    NamedColor::new(0xDA70D6, "Orchid"),
    NamedColor::new(0xDA8A67, "Copperfield"),
    NamedColor::new(0xDAA520, "Golden Grass"),
    NamedColor::new(0xDAECD6, "Zanah"),
    NamedColor::new(0xDAF4F0, "Iceberg"),
    NamedColor::new(0xDAFAFF, "Oyster Bay"),
    NamedColor::new(0xDB5079, "Cranberry"),
    NamedColor::new(0xDB9690, "Petite Orchid"),
    NamedColor::new(0xDB995E, "Di Serria"),
    NamedColor::new(0xDBDBDB, "Alto"),
    NamedColor::new(0xDBFFF8, "Frosted Mint"),
    NamedColor::new(0xDC143C, "Crimson"),
    NamedColor::new(0xDC4333, "Punch"),
    NamedColor::new(0xDCB20C, "Galliano"),
    NamedColor::new(0xDCB4BC, "Blossom"),
    NamedColor::new(0xDCD747, "Wattle"),
    NamedColor::new(0xDCD9D2, "Westar"),
    NamedColor::new(0xDCDDCC, "Moon Mist"),
    NamedColor::new(0xDCEDB4, "Caper"),
    NamedColor::new(0xDCF0EA, "Swans Down"),
    NamedColor::new(0xDDD6D5, "Swiss Coffee"),
    NamedColor::new(0xDDF9F1, "White Ice"),
    NamedColor::new(0xDE3163, "Cerise Red"),
    NamedColor::new(0xDE6360, "Roman"),
    NamedColor::new(0xDEA681, "Tumbleweed"),
    NamedColor::new(0xDEBA13, "Gold Tips"),
    NamedColor::new(0xDEC196, "Brandy"),
    NamedColor::new(0xDECBC6, "Wafer"),
    NamedColor::new(0xDED4A4, "Sapling"),
    NamedColor::new(0xDED717, "Barberry"),
    NamedColor::new(0xDEE5C0, "Beryl Green"),
    NamedColor::new(0xDEF5FF, "Pattens Blue"),
    NamedColor::new(0xDF73FF, "Heliotrope"),
    NamedColor::new(0xDFBE6F, "Apache"),
    NamedColor::new(0xDFCD6F, "Chenin"),
    NamedColor::new(0xDFCFDB, "Lola"),
    NamedColor::new(0xDFECDA, "Willow Brook"),
    NamedColor::new(0xDFFF00, "Chartreuse Yellow"),
    NamedColor::new(0xE0B0FF, "Mauve"),
    NamedColor::new(0xE0B646, "Anzac"),
    NamedColor::new(0xE0B974, "Harvest Gold"),
    NamedColor::new(0xE0C095, "Calico"),
    NamedColor::new(0xE0FFFF, "Baby Blue"),
    NamedColor::new(0xE16865, "Sunglo"),
    NamedColor::new(0xE1BC64, "Equator"),
    NamedColor::new(0xE1C0C8, "Pink Flare"),
    NamedColor::new(0xE1E6D6, "Periglacial Blue"),
    NamedColor::new(0xE1EAD4, "Kidnapper"),
    NamedColor::new(0xE1F6E8, "Tara"),
    NamedColor::new(0xE25465, "Mandy"),
    NamedColor::new(0xE2725B, "Terracotta"),
    NamedColor::new(0xE28913, "Golden Bell"),
    NamedColor::new(0xE292C0, "Shocking"),
    NamedColor::new(0xE29418, "Dixie"),
    NamedColor::new(0xE29CD2, "Light Orchid"),
    NamedColor::new(0xE2D8ED, "Snuff"),
    NamedColor::new(0xE2EBED, "Mystic"),
    NamedColor::new(0xE2F3EC, "Apple Green"),
    NamedColor::new(0xE30B5C, "Razzmatazz"),
    NamedColor::new(0xE32636, "Alizarin Crimson"),
    NamedColor::new(0xE34234, "Cinnabar"),
    NamedColor::new(0xE3BEBE, "Cavern Pink"),
    NamedColor::new(0xE3F5E1, "Peppermint"),
    NamedColor::new(0xE3F988, "Mindaro"),
    NamedColor::new(0xE47698, "Deep Blush"),
    NamedColor::new(0xE49B0F, "Gamboge"),
    NamedColor::new(0xE4C2D5, "Melanie"),
    NamedColor::new(0xE4CFDE, "Twilight"),
    NamedColor::new(0xE4D1C0, "Bone"),
    NamedColor::new(0xE4D422, "Sunflower"),
    NamedColor::new(0xE4D5B7, "Grain Brown"),
    NamedColor::new(0xE4D69B, "Zombie"),
    NamedColor::new(0xE4F6E7, "Frostee"),
    NamedColor::new(0xE4FFD1, "Snow Flurry"),
    NamedColor::new(0xE52B50, "Amaranth"),
    NamedColor::new(0xE5841B, "Zest"),
    NamedColor::new(0xE5CCC9, "Dust Storm"),
    NamedColor::new(0xE5D7BD, "Stark White"),
    NamedColor::new(0xE5D8AF, "Hampton"),
    NamedColor::new(0xE5E0E1, "Bon Jour"),
    NamedColor::new(0xE5E5E5, "Mercury"),
    NamedColor::new(0xE5F9F6, "Polar"),
    NamedColor::new(0xE64E03, "Trinidad"),
    NamedColor::new(0xE6BE8A, "Gold Sand"),
    NamedColor::new(0xE6BEA5, "Cashmere"),
    NamedColor::new(0xE6D7B9, "Double Spanish White"),
    NamedColor::new(0xE6E4D4, "Satin Linen"),
    NamedColor::new(0xE6F2EA, "Harp"),
    NamedColor::new(0xE6F8F3, "Off Green"),
    NamedColor::new(0xE6FFE9, "Hint of Green"),
    NamedColor::new(0xE6FFFF, "Tranquil"),
    NamedColor::new(0xE77200, "Mango Tango"),
    NamedColor::new(0xE7730A, "Christine"),
    NamedColor::new(0xE79F8C, "Tonys Pink"),
    NamedColor::new(0xE79FC4, "Kobi"),
    NamedColor::new(0xE7BCB4, "Rose Fog"),
    NamedColor::new(0xE7BF05, "Corn"),
    NamedColor::new(0xE7CD8C, "Putty"),
    NamedColor::new(0xE7ECE6, "Gray Nurse"),
    NamedColor::new(0xE7F8FF, "Lily White"),
    NamedColor::new(0xE7FEFF, "Bubbles"),
    NamedColor::new(0xE89928, "Fire Bush"),
    NamedColor::new(0xE8B9B3, "Shilo"),
    NamedColor::new(0xE8E0D5, "Pearl Bush"),
    NamedColor::new(0xE8EBE0, "Green White"),
    NamedColor::new(0xE8F1D4, "Chrome White"),
    NamedColor::new(0xE8F2EB, "Gin"),
    NamedColor::new(0xE8F5F2, "Aqua Squeeze"),
    NamedColor::new(0xE96E00, "Clementine"),
    NamedColor::new(0xE97451, "Burnt Sienna"),
    NamedColor::new(0xE97C07, "Tahiti Gold"),
    NamedColor::new(0xE9CECD, "Oyster Pink"),
    NamedColor::new(0xE9D75A, "Confetti"),
    NamedColor::new(0xE9E3E3, "Ebb"),
    NamedColor::new(0xE9F8ED, "Ottoman"),
    NamedColor::new(0xE9FFFD, "Clear Day"),
    NamedColor::new(0xEA88A8, "Carissma"),
    NamedColor::new(0xEAAE69, "Porsche"),
    NamedColor::new(0xEAB33B, "Tulip Tree"),
    NamedColor::new(0xEAC674, "Rob Roy"),
    NamedColor::new(0xEADAB8, "Raffia"),
    NamedColor::new(0xEAE8D4, "White Rock"),
    NamedColor::new(0xEAF6EE, "Panache"),
    NamedColor::new(0xEAF6FF, "Solitude"),
    NamedColor::new(0xEAF9F5, "Aqua Spring"),
    NamedColor::new(0xEAFFFE, "Dew"),
    NamedColor::new(0xEB9373, "Apricot"),
    NamedColor::new(0xEBC2AF, "Zinnwaldite"),
    NamedColor::new(0xECA927, "Fuel Yellow"),
    NamedColor::new(0xECC54E, "Ronchi"),
    NamedColor::new(0xECC7EE, "French Lilac"),
    NamedColor::new(0xECCDB9, "Just Right"),
    NamedColor::new(0xECE090, "Wild Rice"),
    NamedColor::new(0xECEBBD, "Fall Green"),
    NamedColor::new(0xECEBCE, "Aths Special"),
    NamedColor::new(0xECF245, "Starship"),
    NamedColor::new(0xED0A3F, "Red Ribbon"),
    NamedColor::new(0xED7A1C, "Tango"),
    NamedColor::new(0xED9121, "Carrot Orange"),
    NamedColor::new(0xED989E, "Sea Pink"),
    NamedColor::new(0xEDB381, "Tacao"),
    NamedColor::new(0xEDC9AF, "Desert Sand"),
    NamedColor::new(0xEDCDAB, "Pancho"),
    NamedColor::new(0xEDDCB1, "Chamois"),
    NamedColor::new(0xEDEA99, "Primrose"),
    NamedColor::new(0xEDF5DD, "Frost"),
    NamedColor::new(0xEDF5F5, "Aqua Haze"),
    NamedColor::new(0xEDF6FF, "Zumthor"),
    NamedColor::new(0xEDF9F1, "Narvik"),
    NamedColor::new(0xEDFC84, "Honeysuckle"),
    NamedColor::new(0xEE82EE, "Lavender Magenta"),
    NamedColor::new(0xEEC1BE, "Beauty Bush"),
    NamedColor::new(0xEED794, "Chalky"),
    NamedColor::new(0xEED9C4, "Almond"),
    NamedColor::new(0xEEDC82, "Flax"),
    NamedColor::new(0xEEDEDA, "Bizarre"),
    NamedColor::new(0xEEE3AD, "Double Colonial White"),
    NamedColor::new(0xEEEEE8, "Cararra"),
    NamedColor::new(0xEEEF78, "Manz"),
    NamedColor::new(0xEEF0C8, "Tahuna Sands"),
    NamedColor::new(0xEEF0F3, "Athens Gray"),
    NamedColor::new(0xEEF3C3, "Tusk"),
    NamedColor::new(0xEEF4DE, "Loafer"),
    NamedColor::new(0xEEF6F7, "Catskill White"),
    NamedColor::new(0xEEFDFF, "Twilight Blue"),
    NamedColor::new(0xEEFF9A, "Jonquil"),
    NamedColor::new(0xEEFFE2, "Rice Flower"),
    NamedColor::new(0xEF863F, "Jaffa"),
    NamedColor::new(0xEFEFEF, "Gallery"),
    NamedColor::new(0xEFF2F3, "Porcelain"),
    NamedColor::new(0xF091A9, "Mauvelous"),
    NamedColor::new(0xF0D52D, "Golden Dream"),
    NamedColor::new(0xF0DB7D, "Golden Sand"),
    NamedColor::new(0xF0DC82, "Buff"),
    NamedColor::new(0xF0E2EC, "Prim"),
    NamedColor::new(0xF0E68C, "Khaki"),
    NamedColor::new(0xF0EEFD, "Selago"),
    NamedColor::new(0xF0EEFF, "Titan White"),
    NamedColor::new(0xF0F8FF, "Alice Blue"),
    NamedColor::new(0xF0FCEA, "Feta"),
    NamedColor::new(0xF18200, "Gold Drop"),
    NamedColor::new(0xF19BAB, "Wewak"),
    NamedColor::new(0xF1E788, "Sahara Sand"),
    NamedColor::new(0xF1E9D2, "Parchment"),
    NamedColor::new(0xF1E9FF, "Blue Chalk"),
    NamedColor::new(0xF1EEC1, "Mint Julep"),
    NamedColor::new(0xF1F1F1, "Seashell"),
    NamedColor::new(0xF1F7F2, "Saltpan"),
    NamedColor::new(0xF1FFAD, "Tidal"),
    NamedColor::new(0xF1FFC8, "Chiffon"),
    NamedColor::new(0xF2552A, "Flamingo"),
    NamedColor::new(0xF28500, "Tangerine"),
    NamedColor::new(0xF2C3B2, "Mandys Pink"),
    NamedColor::new(0xF2F2F2, "Concrete"),
    NamedColor::new(0xF2FAFA, "Black Squeeze"),
    NamedColor::new(0xF34723, "Pomegranate"),
    NamedColor::new(0xF3AD16, "Buttercup"),
    NamedColor::new(0xF3D69D, "New Orleans"),
    NamedColor::new(0xF3D9DF, "Vanilla Ice"),
    NamedColor::new(0xF3E7BB, "Sidecar"),
    NamedColor::new(0xF3E9E5, "Dawn Pink"),
    NamedColor::new(0xF3EDCF, "Wheatfield"),
    NamedColor::new(0xF3FB62, "Canary"),
    NamedColor::new(0xF3FBD4, "Orinoco"),
    NamedColor::new(0xF3FFD8, "Carla"),
    NamedColor::new(0xF400A1, "Hollywood Cerise"),
    NamedColor::new(0xF4A460, "Sandy brown"),
    NamedColor::new(0xF4C430, "Saffron"),
    NamedColor::new(0xF4D81C, "Ripe Lemon"),
    NamedColor::new(0xF4EBD3, "Janna"),
    NamedColor::new(0xF4F2EE, "Pampas"),
    NamedColor::new(0xF4F4F4, "Wild Sand"),
    NamedColor::new(0xF4F8FF, "Zircon"),
    NamedColor::new(0xF57584, "Froly"),
    NamedColor::new(0xF5C85C, "Cream Can"),
    NamedColor::new(0xF5C999, "Manhattan"),
    NamedColor::new(0xF5D5A0, "Maize"),
    NamedColor::new(0xF5DEB3, "Wheat"),
    NamedColor::new(0xF5E7A2, "Sandwisp"),
    NamedColor::new(0xF5E7E2, "Pot Pourri"),
    NamedColor::new(0xF5E9D3, "Albescent White"),
    NamedColor::new(0xF5EDEF, "Soft Peach"),
    NamedColor::new(0xF5F3E5, "Ecru White"),
    NamedColor::new(0xF5F5DC, "Beige"),
    NamedColor::new(0xF5FB3D, "Golden Fizz"),
    NamedColor::new(0xF5FFBE, "Australian Mint"),
    NamedColor::new(0xF64A8A, "French Rose"),
    NamedColor::new(0xF653A6, "Brilliant Rose"),
    NamedColor::new(0xF6A4C9, "Illusion"),
    NamedColor::new(0xF6F0E6, "Merino"),
    NamedColor::new(0xF6F7F7, "Black Haze"),
    NamedColor::new(0xF6FFDC, "Spring Sun"),
    NamedColor::new(0xF7468A, "Violet Red"),
    NamedColor::new(0xF77703, "Chilean Fire"),
    NamedColor::new(0xF77FBE, "Persian Pink"),
    NamedColor::new(0xF7B668, "Rajah"),
    NamedColor::new(0xF7C8DA, "Azalea"),
    NamedColor::new(0xF7DBE6, "We Peep"),
    NamedColor::new(0xF7F2E1, "Quarter Spanish White"),
    NamedColor::new(0xF7F5FA, "Whisper"),
    NamedColor::new(0xF7FAF7, "Snow Drift"),
    NamedColor::new(0xF8B853, "Casablanca"),
    NamedColor::new(0xF8C3DF, "Chantilly"),
    NamedColor::new(0xF8D9E9, "Cherub"),
    NamedColor::new(0xF8DB9D, "Marzipan"),
    NamedColor::new(0xF8DD5C, "Energy Yellow"),
    NamedColor::new(0xF8E4BF, "Givry"),
    NamedColor::new(0xF8F0E8, "White Linen"),
    NamedColor::new(0xF8F4FF, "Magnolia"),
    NamedColor::new(0xF8F6F1, "Spring Wood"),
    NamedColor::new(0xF8F7DC, "Coconut Cream"),
    NamedColor::new(0xF8F7FC, "White Lilac"),
    NamedColor::new(0xF8F8F7, "Desert Storm"),
    NamedColor::new(0xF8F99C, "Texas"),
    NamedColor::new(0xF8FACD, "Corn Field"),
    NamedColor::new(0xF8FDD3, "Mimosa"),
    NamedColor::new(0xF95A61, "Carnation"),
    NamedColor::new(0xF9BF58, "Saffron Mango"),
    NamedColor::new(0xF9E0ED, "Carousel Pink"),
    NamedColor::new(0xF9E4BC, "Dairy Cream"),
    NamedColor::new(0xF9E663, "Portica"),
    NamedColor::new(0xF9EAF3, "Amour"),
    NamedColor::new(0xF9F8E4, "Rum Swizzle"),
    NamedColor::new(0xF9FF8B, "Dolly"),
    NamedColor::new(0xF9FFF6, "Sugar Cane"),
    NamedColor::new(0xFA7814, "Ecstasy"),
    NamedColor::new(0xFA9D5A, "Tan Hide"),
    NamedColor::new(0xFAD3A2, "Corvette"),
    NamedColor::new(0xFADFAD, "Peach Yellow"),
    NamedColor::new(0xFAE600, "Turbo"),
    NamedColor::new(0xFAEAB9, "Astra"),
    NamedColor::new(0xFAECCC, "Champagne"),
    NamedColor::new(0xFAF0E6, "Linen"),
    NamedColor::new(0xFAF3F0, "Fantasy"),
    NamedColor::new(0xFAF7D6, "Citrine White"),
    NamedColor::new(0xFAFAFA, "Alabaster"),
    NamedColor::new(0xFAFDE4, "Hint of Yellow"),
    NamedColor::new(0xFAFFA4, "Milan"),
    NamedColor::new(0xFB607F, "Brink Pink"),
    NamedColor::new(0xFB8989, "Geraldine"),
    NamedColor::new(0xFBA0E3, "Lavender Rose"),
    NamedColor::new(0xFBA129, "Sea Buckthorn"),
    NamedColor::new(0xFBAC13, "Sun"),
    NamedColor::new(0xFBAED2, "Lavender Pink"),
    NamedColor::new(0xFBB2A3, "Rose Bud"),
    NamedColor::new(0xFBBEDA, "Cupid"),
    NamedColor::new(0xFBCCE7, "Classic Rose"),
    NamedColor::new(0xFBCEB1, "Apricot Peach"),
    NamedColor::new(0xFBE7B2, "Banana Mania"),
    NamedColor::new(0xFBE870, "Marigold Yellow"),
    NamedColor::new(0xFBE96C, "Festival"),
    NamedColor::new(0xFBEA8C, "Sweet Corn"),
    NamedColor::new(0xFBEC5D, "Candy Corn"),
    NamedColor::new(0xFBF9F9, "Hint of Red"),
    NamedColor::new(0xFBFFBA, "Shalimar"),
    NamedColor::new(0xFC0FC0, "Shocking Pink"),
    NamedColor::new(0xFC80A5, "Tickle Me Pink"),
    NamedColor::new(0xFC9C1D, "Tree Poppy"),
    NamedColor::new(0xFCC01E, "Lightning Yellow"),
    NamedColor::new(0xFCD667, "Goldenrod"),
    NamedColor::new(0xFCD917, "Candlelight"),
    NamedColor::new(0xFCDA98, "Cherokee"),
    NamedColor::new(0xFCF4D0, "Double Pearl Lusta"),
    NamedColor::new(0xFCF4DC, "Pearl Lusta"),
    NamedColor::new(0xFCF8F7, "Vista White"),
    NamedColor::new(0xFCFBF3, "Bianca"),
    NamedColor::new(0xFCFEDA, "Moon Glow"),
    NamedColor::new(0xFCFFE7, "China Ivory"),
    NamedColor::new(0xFCFFF9, "Ceramic"),
    NamedColor::new(0xFD0E35, "Torch Red"),
    NamedColor::new(0xFD5B78, "Wild Watermelon"),
    NamedColor::new(0xFD7B33, "Crusta"),
    NamedColor::new(0xFD7C07, "Sorbus"),
    NamedColor::new(0xFD9FA2, "Sweet Pink"),
    NamedColor::new(0xFDD5B1, "Light Apricot"),
    NamedColor::new(0xFDD7E4, "Pig Pink"),
    NamedColor::new(0xFDE1DC, "Cinderella"),
    NamedColor::new(0xFDE295, "Golden Glow"),
    NamedColor::new(0xFDE910, "Lemon"),
    NamedColor::new(0xFDF5E6, "Old Lace"),
    NamedColor::new(0xFDF6D3, "Half Colonial White"),
    NamedColor::new(0xFDF7AD, "Drover"),
    NamedColor::new(0xFDFEB8, "Pale Prim"),
    NamedColor::new(0xFDFFD5, "Cumulus"),
    NamedColor::new(0xFE28A2, "Persian Rose"),
    NamedColor::new(0xFE4C40, "Sunset Orange"),
    NamedColor::new(0xFE6F5E, "Bittersweet"),
    NamedColor::new(0xFE9D04, "California"),
    NamedColor::new(0xFEA904, "Yellow Sea"),
    NamedColor::new(0xFEBAAD, "Melon"),
    NamedColor::new(0xFED33C, "Bright Sun"),
    NamedColor::new(0xFED85D, "Dandelion"),
    NamedColor::new(0xFEDB8D, "Salomie"),
    NamedColor::new(0xFEE5AC, "Cape Honey"),
    NamedColor::new(0xFEEBF3, "Remy"),
    NamedColor::new(0xFEEFCE, "Oasis"),
    NamedColor::new(0xFEF0EC, "Bridesmaid"),
    NamedColor::new(0xFEF2C7, "Beeswax"),
    NamedColor::new(0xFEF3D8, "Bleach White"),
    NamedColor::new(0xFEF4CC, "Pipi"),
    NamedColor::new(0xFEF4DB, "Half Spanish White"),
    NamedColor::new(0xFEF4F8, "Wisp Pink"),
    NamedColor::new(0xFEF5F1, "Provincial Pink"),
    NamedColor::new(0xFEF7DE, "Half Dutch White"),
    NamedColor::new(0xFEF8E2, "Solitaire"),
    NamedColor::new(0xFEF8FF, "White Pointer"),
    NamedColor::new(0xFEF9E3, "Off Yellow"),
    NamedColor::new(0xFEFCED, "Orange White"),
    NamedColor::new(0xFF0000, "Red"),
    NamedColor::new(0xFF007F, "Rose"),
    NamedColor::new(0xFF00CC, "Purple Pizzazz"),
    NamedColor::new(0xFF00FF, "Magenta / Fuchsia"),
    NamedColor::new(0xFF2400, "Scarlet"),
    NamedColor::new(0xFF3399, "Wild Strawberry"),
    NamedColor::new(0xFF33CC, "Razzle Dazzle Rose"),
    NamedColor::new(0xFF355E, "Radical Red"),
    NamedColor::new(0xFF3F34, "Red Orange"),
    NamedColor::new(0xFF4040, "Coral Red"),
    NamedColor::new(0xFF4D00, "Vermilion"),
    NamedColor::new(0xFF4F00, "International Orange"),
    NamedColor::new(0xFF6037, "Outrageous Orange"),
    NamedColor::new(0xFF6600, "Blaze Orange"),
    NamedColor::new(0xFF66FF, "Pink Flamingo"),
    NamedColor::new(0xFF681F, "Orange"),
    NamedColor::new(0xFF69B4, "Hot Pink"),
    NamedColor::new(0xFF6B53, "Persimmon"),
    NamedColor::new(0xFF6FFF, "Blush Pink"),
    NamedColor::new(0xFF7034, "Burning Orange"),
    NamedColor::new(0xFF7518, "Pumpkin"),
    NamedColor::new(0xFF7D07, "Flamenco"),
    NamedColor::new(0xFF7F00, "Flush Orange"),
    NamedColor::new(0xFF7F50, "Coral"),
    NamedColor::new(0xFF8C69, "Salmon"),
    NamedColor::new(0xFF9000, "Pizazz"),
    NamedColor::new(0xFF910F, "West Side"),
    NamedColor::new(0xFF91A4, "Pink Salmon"),
    NamedColor::new(0xFF9933, "Neon Carrot"),
    NamedColor::new(0xFF9966, "Atomic Tangerine"),
    NamedColor::new(0xFF9980, "Vivid Tangerine"),
    NamedColor::new(0xFF9E2C, "Sunshade"),
    NamedColor::new(0xFFA000, "Orange Peel"),
    NamedColor::new(0xFFA194, "Mona Lisa"),
    NamedColor::new(0xFFA500, "Web Orange"),
    NamedColor::new(0xFFA6C9, "Carnation Pink"),
    NamedColor::new(0xFFAB81, "Hit Pink"),
    NamedColor::new(0xFFAE42, "Yellow Orange"),
    NamedColor::new(0xFFB0AC, "Cornflower Lilac"),
    NamedColor::new(0xFFB1B3, "Sundown"),
    NamedColor::new(0xFFB31F, "My Sin"),
    NamedColor::new(0xFFB555, "Texas Rose"),
    NamedColor::new(0xFFB7D5, "Cotton Candy"),
    NamedColor::new(0xFFB97B, "Macaroni and Cheese"),
    NamedColor::new(0xFFBA00, "Selective Yellow"),
    NamedColor::new(0xFFBD5F, "Koromiko"),
    NamedColor::new(0xFFBF00, "Amber"),
    NamedColor::new(0xFFC0A8, "Wax Flower"),
    NamedColor::new(0xFFC0CB, "Pink"),
    NamedColor::new(0xFFC3C0, "Your Pink"),
    NamedColor::new(0xFFC901, "Supernova"),
    NamedColor::new(0xFFCBA4, "Flesh"),
    NamedColor::new(0xFFCC33, "Sunglow"),
    NamedColor::new(0xFFCC5C, "Golden Tainoi"),
    NamedColor::new(0xFFCC99, "Peach Orange"),
    NamedColor::new(0xFFCD8C, "Chardonnay"),
    NamedColor::new(0xFFD1DC, "Pastel Pink"),
    NamedColor::new(0xFFD2B7, "Romantic"),
    NamedColor::new(0xFFD38C, "Grandis"),
    NamedColor::new(0xFFD700, "Gold"),
    NamedColor::new(0xFFD800, "School bus Yellow"),
    NamedColor::new(0xFFD8D9, "Cosmos"),
    NamedColor::new(0xFFDB58, "Mustard"),
    NamedColor::new(0xFFDCD6, "Peach Schnapps"),
    NamedColor::new(0xFFDDAF, "Caramel"),
    NamedColor::new(0xFFDDCD, "Tuft Bush"),
    NamedColor::new(0xFFDDCF, "Watusi"),
    NamedColor::new(0xFFDDF4, "Pink Lace"),
    NamedColor::new(0xFFDEAD, "Navajo White"),
    NamedColor::new(0xFFDEB3, "Frangipani"),
    NamedColor::new(0xFFE1DF, "Pippin"),
    NamedColor::new(0xFFE1F2, "Pale Rose"),
    NamedColor::new(0xFFE2C5, "Negroni"),
    NamedColor::new(0xFFE5A0, "Cream Brulee"),
    NamedColor::new(0xFFE5B4, "Peach"),
    NamedColor::new(0xFFE6C7, "Tequila"),
    NamedColor::new(0xFFE772, "Kournikova"),
    NamedColor::new(0xFFEAC8, "Sandy Beach"),
    NamedColor::new(0xFFEAD4, "Karry"),
    NamedColor::new(0xFFEC13, "Broom"),
    NamedColor::new(0xFFEDBC, "Colonial White"),
    NamedColor::new(0xFFEED8, "Derby"),
    NamedColor::new(0xFFEFA1, "Vis Vis"),
    NamedColor::new(0xFFEFC1, "Egg White"),
    NamedColor::new(0xFFEFD5, "Papaya Whip"),
    NamedColor::new(0xFFEFEC, "Fair Pink"),
    NamedColor::new(0xFFF0DB, "Peach Cream"),
    NamedColor::new(0xFFF0F5, "Lavender blush"),
    NamedColor::new(0xFFF14F, "Gorse"),
    NamedColor::new(0xFFF1B5, "Buttermilk"),
    NamedColor::new(0xFFF1D8, "Pink Lady"),
    NamedColor::new(0xFFF1EE, "Forget Me Not"),
    NamedColor::new(0xFFF1F9, "Tutu"),
    NamedColor::new(0xFFF39D, "Picasso"),
    NamedColor::new(0xFFF3F1, "Chardon"),
    NamedColor::new(0xFFF46E, "Paris Daisy"),
    NamedColor::new(0xFFF4CE, "Barley White"),
    NamedColor::new(0xFFF4DD, "Egg Sour"),
    NamedColor::new(0xFFF4E0, "Sazerac"),
    NamedColor::new(0xFFF4E8, "Serenade"),
    NamedColor::new(0xFFF4F3, "Chablis"),
    NamedColor::new(0xFFF5EE, "Seashell Peach"),
    NamedColor::new(0xFFF5F3, "Sauvignon"),
    NamedColor::new(0xFFF6D4, "Milk Punch"),
    NamedColor::new(0xFFF6DF, "Varden"),
    NamedColor::new(0xFFF6F5, "Rose White"),
    NamedColor::new(0xFFF8D1, "Baja White"),
    NamedColor::new(0xFFF9E2, "Gin Fizz"),
    NamedColor::new(0xFFF9E6, "Early Dawn"),
    NamedColor::new(0xFFFACD, "Lemon Chiffon"),
    NamedColor::new(0xFFFAF4, "Bridal Heath"),
    NamedColor::new(0xFFFBDC, "Scotch Mist"),
    NamedColor::new(0xFFFBF9, "Soapstone"),
    NamedColor::new(0xFFFC99, "Witch Haze"),
    NamedColor::new(0xFFFCEA, "Buttery White"),
    NamedColor::new(0xFFFCEE, "Island Spice"),
    NamedColor::new(0xFFFDD0, "Cream"),
    NamedColor::new(0xFFFDE6, "Chilean Heath"),
    NamedColor::new(0xFFFDE8, "Travertine"),
    NamedColor::new(0xFFFDF3, "Orchid White"),
    NamedColor::new(0xFFFDF4, "Quarter Pearl Lusta"),
    NamedColor::new(0xFFFEE1, "Half and Half"),
    NamedColor::new(0xFFFEEC, "Apricot White"),
    NamedColor::new(0xFFFEF0, "Rice Cake"),
    NamedColor::new(0xFFFEF6, "Black White"),
    NamedColor::new(0xFFFEFD, "Romance"),
    NamedColor::new(0xFFFF00, "Yellow"),
    NamedColor::new(0xFFFF66, "Laser Lemon"),
    NamedColor::new(0xFFFF99, "Pale Canary"),
    NamedColor::new(0xFFFFB4, "Portafino"),
    NamedColor::new(0xFFFFF0, "Ivory"),
    NamedColor::new(0xFFFFFF, "White"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_sorted_by_hex() {
        let values: Vec<u32> = Palette::all()
            .iter()
            .map(|c| (c.hex.r as u32) << 16 | (c.hex.g as u32) << 8 | c.hex.b as u32)
            .collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_by_name() {
        let red = Palette::by_name("red").unwrap();
        assert_eq!(red.hex, HexColor::new(255, 0, 0));
        assert!(Palette::by_name("Not A Color").is_none());
    }

    #[test]
    fn test_full_name_table() {
        assert_eq!(Palette::all().len(), 1566);
        assert_eq!(Palette::by_name("Stratos").unwrap().hex, HexColor::new(0x00, 0x07, 0x41));
        assert_eq!(Palette::by_name("Romance").unwrap().hex, HexColor::new(0xFF, 0xFE, 0xFD));
        assert_eq!(Palette::all()[0].name, "Black");
        assert_eq!(Palette::all()[1565].name, "White");
    }

    #[test]
    fn test_names_non_empty() {
        assert!(Palette::all().iter().all(|c| !c.name.trim().is_empty()));
    }
}
