//! Embedded magic multipliers, one `(lower, upper)` pair per intersection in
//! rank-major order. Each pair hashes its square's relevant occupancies into a
//! table with one slot per occupancy subset. A zero multiplier means that half
//! of the mask is empty.

use crate::board::types::INTERSECTIONS;

pub(super) static HORSE_MAGICS: [(u64, u64); INTERSECTIONS] = [
    (0x4c30600024888135, 0x0000000000000000), (0x1010030802820412, 0x0000000000000000),
    (0x7014580005518437, 0x0000000000000000), (0x6882404000300422, 0x0000000000000000),
    (0x340908302419a080, 0x0000000000000000), (0x022080c9442b1490, 0x0000000000000000),
    (0x2900445031a28040, 0x0000000000000000), (0x0106400000000000, 0x0000000000000000),
    (0x88e0217c08020105, 0x0000000000000000), (0x240948ac0a000260, 0x0000000000000000),
    (0x000200a544010984, 0x0000000000000000), (0x0210908246525511, 0x0000000000000000),
    (0x412a04a020240164, 0x0000000000000000), (0x0041084041000180, 0x0000000000000000),
    (0x2202119110294402, 0x0000000000000000), (0xe200210800f10808, 0x0000000000000000),
    (0x0a882102410c1290, 0x0000000000000000), (0x242241b51144202a, 0x0000000000000000),
    (0x8010211e42a260e6, 0x0000000000000000), (0x0a14510102443805, 0x0000000000000000),
    (0x0004110ad00343a0, 0x0000000000000000), (0x311224820a250d20, 0x0000000000000000),
    (0x054500428c412030, 0x0000000000000000), (0x8400408488114052, 0x0000000000000000),
    (0x0898411015824109, 0x0000000000000000), (0x2800c110a082c300, 0x0000000000000000),
    (0x5939a24c6141408c, 0x0000000000000000), (0x2a280899806811d0, 0x0000000000000000),
    (0x0304040821208880, 0x0000000000000000), (0x2800946242902410, 0x0000000000000000),
    (0x208499c011108012, 0x0000000000000000), (0x8038084210ad0400, 0x0000000000000000),
    (0x023b004284431001, 0x0000000000000000), (0x183a2864cc111446, 0x0000000000000000),
    (0x1033740438409086, 0x0000000000000000), (0x0800002606168000, 0x0000000000000000),
    (0x0086103106c02b00, 0x0000000000000000), (0x0004020284045000, 0x0000000000000000),
    (0x38441034b1109400, 0x0000000000000000), (0x01042783512c0c22, 0x0000000000000000),
    (0x8c04080408109104, 0x0000000000000000), (0xa3b5061912220088, 0x0000000000000000),
    (0x4202902603030940, 0x0000000000000000), (0xb001574469010048, 0x0000000000000000),
    (0x0400000001684020, 0x0000000000000000), (0x604051004f80880a, 0x0000000000000000),
    (0x000a045410130c04, 0x0000000000000000), (0xce10808200183882, 0x0000000000000000),
    (0x0000000200040101, 0x0000000000000000), (0x4202011408391100, 0x4b0860644050c2e2),
    (0x28004800c02ad482, 0xe093a000024580a4), (0x3e2008178bc30b09, 0x091708202e091280),
    (0x2800182000008480, 0x0293800020040000), (0x081902027e06c048, 0x26044a0080025613),
    (0x005100702191588c, 0x0104ac080001000d), (0x000884083c8608e2, 0x122d186968110846),
    (0x2280000882000401, 0x4010420000810101), (0x8101139a20200c07, 0x244c704141824840),
    (0x0831002890103f01, 0x080a3018b006c180), (0x8801080400102901, 0x114509025014c100),
    (0x406a886204020042, 0xc2220020ad821084), (0x0229920004880008, 0x1084008000001400),
    (0x502082104a044a20, 0x06051000125018c0), (0x1500240915408054, 0x0060800228802804),
    (0xe200701102035002, 0x98844a4818f0005e), (0x81422280001c1086, 0x5049311211042251),
    (0x240c040502102067, 0x8ad8481624804444), (0x0000000000000000, 0x51308c1d00504400),
    (0x0000000000000000, 0xa22809ca4021812d), (0x0000000000000000, 0x208900d085201808),
    (0x0000000000000000, 0x0434182001000940), (0x0000000000000000, 0xc3020083d3952001),
    (0x0000000000000000, 0x27242c4474006024), (0x0000000000000000, 0x0100100100414414),
    (0x0000000000000000, 0x8190080000004001), (0x0000000000000000, 0x0010040020080018),
    (0x0000000000000000, 0xd460060000825100), (0x0000000000000000, 0x2831010a09000000),
    (0x0000000000000000, 0x2414144000040002), (0x0000000000000000, 0x0015030000818038),
    (0x0000000000000000, 0x0681304044810800), (0x0000000000000000, 0x0000808809000200),
    (0x0000000000000000, 0xc2004183413104f4), (0x0000000000000000, 0x2a841084860c8145),
    (0x0000000000000000, 0xb42c1c49020c1444), (0x0000000000000000, 0x04090404c4810b88),
    (0x0000000000000000, 0x50a80261840382b8), (0x0000000000000000, 0x86002725435004e6),
    (0x0000000000000000, 0x000000c084008200), (0x0000000000000000, 0x19c8504c42000884),
];

pub(super) static ELEPHANT_MAGICS: [(u64, u64); INTERSECTIONS] = [
    (0x011ec00a400a4064, 0x0000000000000000), (0x218c0888cc004740, 0x0000000000000000),
    (0x887250904b02086f, 0x0000000000000000), (0x450e08c48448104f, 0x0000000000000000),
    (0x04030000000a4000, 0x0000000000000000), (0x0102402000005080, 0x0000000000000000),
    (0x212162091c0a10c0, 0x0000000000000000), (0x0002a00080103003, 0x0000000000000000),
    (0x4800400290424011, 0x0000000000000000), (0x8880c400480280a4, 0x0000000000000000),
    (0x95280fc214244013, 0x0000000000000000), (0xa0120f04c224cc03, 0x0000000000000000),
    (0x401002500014de03, 0x0000000000000000), (0xca0220c0c8180411, 0x0000000000000000),
    (0x07440161e8221184, 0x0000000000000000), (0x8000004900000008, 0x0000000000000000),
    (0x244a4230280120e8, 0x0000000000000000), (0xa050403182046300, 0x0000000000000000),
    (0x430881dd0ca43a00, 0x0000000000000000), (0x00a82a2368017218, 0x0000000000000000),
    (0x00440014a202e000, 0x0000000000000000), (0x002a140044025413, 0x0000000000000000),
    (0x0008900050210080, 0x0000000000000000), (0x00044282081041e8, 0x0000000000000000),
    (0x9341615804260601, 0x0000000000000000), (0x0004842744020002, 0x0000000000000000),
    (0x0180c0006a188124, 0x0000000000000000), (0x06091c0080020100, 0x0000000000000000),
    (0x8884e381662a4882, 0x0000000000000000), (0x848d230821420470, 0x0000000000000000),
    (0x323c4381449040d2, 0x0000000000000000), (0x800060c023c1822a, 0x0000000000000000),
    (0x0008109100000220, 0x0000000000000000), (0xc000093004030048, 0x0000000000000000),
    (0x0000c02120001004, 0x0000000000000000), (0x0000105020005008, 0x0000000000000000),
    (0x448c000194222420, 0x0000000000000000), (0x10503510ac900002, 0x0000000000000000),
    (0x5032000121311500, 0x0000000000000000), (0x2002008064821400, 0x0000000000000000),
    (0x10a1080249024080, 0x0000000000000000), (0x040062025810c0d6, 0x0000000000000000),
    (0x2d1300219c11002f, 0x0000000000000000), (0x08ac440a291c0900, 0x0000000000000000),
    (0x1800e444a4505018, 0x0000000000000000), (0x60c510260e25c456, 0x0000000000000000),
    (0x0100088620a01002, 0x0000000000000000), (0x0604e00860008a0b, 0x0000000000000000),
    (0xa0c0840420628a42, 0xc302002c22022f00), (0x2201800020000011, 0x2410c97000000140),
    (0x0000000000000000, 0x64208094b11b1d44), (0x0000000000000000, 0x594010649420400a),
    (0x0000000000000000, 0x290083488ad00272), (0x0000000000000000, 0xf460223d1a220908),
    (0x0000000000000000, 0x0d200301ea400328), (0x0000000000000000, 0x00881c80b054800f),
    (0x0000000000000000, 0x0ac0000004100004), (0x0000000000000000, 0x25659808a0100221),
    (0x0000000000000000, 0x30cc2042014c27e0), (0x0000000000000000, 0x4038626c50204203),
    (0x0000000000000000, 0x621244001800a802), (0x0000000000000000, 0x000800000008010c),
    (0x0000000000000000, 0x30240b5000020412), (0x082a002081c40084, 0x20186608480102aa),
    (0x04e800220764101b, 0x3318e00c10c00024), (0x804824a480801e03, 0x90802220a29b04e4),
    (0x0000204404000005, 0x1020880020000808), (0x10810800e3000901, 0xa06a6b10068308ca),
    (0x0000000000000000, 0x20d18102404900b2), (0x0000000000000000, 0x66410100941d0010),
    (0x0000000000000000, 0x201155096002300a), (0x0000000000000000, 0x0800a10842220001),
    (0x0000000000000000, 0x49002844a1a502c8), (0x0000000000000000, 0x86a138015004798c),
    (0x0000000000000000, 0x87c009343052a803), (0x0000000000000000, 0x40b062000c009010),
    (0x0000000000000000, 0x064c8810ea296486), (0x0000000000000000, 0x006461422024c0f2),
    (0x0000000000000000, 0x240cc24104000a42), (0x0000000000000000, 0x014c820001100004),
    (0x0000000000000000, 0x0054000012000004), (0x0000000000000000, 0x1200440400080401),
    (0x0000000000000000, 0xb080ab000010e411), (0x0000000000000000, 0x01004c108c174124),
    (0x0000000000000000, 0x0009a65000000421), (0x0000000000000000, 0x28c1922011418640),
    (0x0000000000000000, 0x5813290000082268), (0x0000000000000000, 0x1c102b06858001a8),
    (0x0000000000000000, 0x5420360486000320), (0x0000000000000000, 0x1245c58197512051),
];

pub(super) static ROOK_RANK_MAGICS: [(u64, u64); INTERSECTIONS] = [
    (0x41000002001a0300, 0x0000000000000000), (0x0501002090388800, 0x0000000000000000),
    (0x07001260004008c0, 0x0000000000000000), (0x2502000ea0820612, 0x0000000000000000),
    (0x49004000601210c8, 0x0000000000000000), (0xb102000060240010, 0x0000000000000000),
    (0x04085e0082640201, 0x0000000000000000), (0x020108898a800400, 0x0000000000000000),
    (0x8101090000004000, 0x0000000000000000), (0xd382400ae1a81d44, 0x0000000000000000),
    (0x100a081900000020, 0x0000000000000000), (0x0010200080845010, 0x0000000000000000),
    (0x0201401009808040, 0x0000000000000000), (0x4dc4080b8b062612, 0x0000000000000000),
    (0x0004402a50281b01, 0x0000000000000000), (0x00c3020000880422, 0x0000000000000000),
    (0x102a8210000a0101, 0x0000000000000000), (0x9328408124c48260, 0x0000000000000000),
    (0x20000a1000808462, 0x0000000000000000), (0x300005154401bf00, 0x0000000000000000),
    (0x0002143001008220, 0x0000000000000000), (0x010400d010008008, 0x0000000000000000),
    (0x0000050200500801, 0x0000000000000000), (0x0210011008100000, 0x0000000000000000),
    (0x012000c090000048, 0x0000000000000000), (0x4410002000241080, 0x0000000000000000),
    (0x0000201000080104, 0x0000000000000000), (0x000140008c03c001, 0x0000000000000000),
    (0x001a225025268080, 0x0000000000000000), (0x0a1301216c080120, 0x0000000000000000),
    (0x0084e414340104e0, 0x0000000000000000), (0x058025404080005a, 0x0000000000000000),
    (0x0008400044000088, 0x0000000000000000), (0x4a30310050280022, 0x0000000000000000),
    (0x0022040008000300, 0x0000000000000000), (0x2200001004014140, 0x0000000000000000),
    (0x082460096009003f, 0x0000000000000000), (0x8012001084210201, 0x0000000000000000),
    (0x20040c0201418000, 0x0000000000000000), (0x2684614112650149, 0x0000000000000000),
    (0x37064a0001590020, 0x0000000000000000), (0x2000343802110002, 0x0000000000000000),
    (0x1c400010432101b0, 0x0000000000000000), (0x8a00000c10410202, 0x0000000000000000),
    (0x004720a060090004, 0x0000000000000000), (0x0208a1005c006b40, 0x0000000000000000),
    (0x0421a20026000f41, 0x0000000000000000), (0x05f0800c319208c0, 0x0000000000000000),
    (0x8c84320807981940, 0x0000000000000000), (0x7101006920001640, 0x0000000000000000),
    (0x0820201041008440, 0x0000000000000000), (0x82809a1191030840, 0x0000000000000000),
    (0x0568087086c40180, 0x0000000000000000), (0x5506000020740040, 0x0000000000000000),
    (0x300109c007029d01, 0x4c4408028500609a), (0xb1a80e8313502259, 0x0c10100996208441),
    (0x4200388844684007, 0x4200401846081209), (0x0400004008001002, 0x0402810040002480),
    (0x260008380b006501, 0x0916c00081240d84), (0x0c22e19180240009, 0xb122018428430760),
    (0x160e10098041084d, 0x788c72e002021086), (0x000d408cb0020015, 0x121200680a014807),
    (0x682000748009b051, 0x0200004050000603), (0x0000000000000000, 0x8410204004642004),
    (0x0000000000000000, 0x0114048460900400), (0x0000000000000000, 0x002c000000000ec0),
    (0x0000000000000000, 0x0081020420080000), (0x0000000000000000, 0x0024000200048040),
    (0x0000000000000000, 0x404400874040308c), (0x0000000000000000, 0x0010201644108200),
    (0x0000000000000000, 0x0808100080204086), (0x0000000000000000, 0xc004000111004000),
    (0x0000000000000000, 0x0800410000820041), (0x0000000000000000, 0x0080010000000804),
    (0x0000000000000000, 0x0402418060162630), (0x0000000000000000, 0x0004a04228000000),
    (0x0000000000000000, 0x000090200022000e), (0x0000000000000000, 0x425a98110422e020),
    (0x0000000000000000, 0x0000610090004000), (0x0000000000000000, 0x20330a0800001401),
    (0x0000000000000000, 0x0299810000000240), (0x0000000000000000, 0x0020350040002200),
    (0x0000000000000000, 0x0088800a400502c0), (0x0000000000000000, 0x10008002c0021400),
    (0x0000000000000000, 0xc00cb80140403c06), (0x0000000000000000, 0x0001130408280a01),
    (0x0000000000000000, 0x1080108440881484), (0x0000000000000000, 0x80200081024d1101),
    (0x0000000000000000, 0x1000120104000000), (0x0000000000000000, 0x15020801c0002000),
];

pub(super) static ROOK_FILE_MAGICS: [(u64, u64); INTERSECTIONS] = [
    (0x88240402202c0988, 0x208105221ccc000a), (0x0101009100020801, 0x0520208007120028),
    (0x0000101858181046, 0x0040040002080111), (0x2040104000a20201, 0x00020900810a0000),
    (0x0104803002101018, 0x402d0804000000c0), (0x0000082488040040, 0x0847001000133000),
    (0x0410098502000880, 0x2c02830010030240), (0x1849163802083040, 0xa1d4804028701208),
    (0x0010404042808030, 0x0504200200000420), (0x2130c56101a40a03, 0x618180292ad18002),
    (0xc80404084011020a, 0x80480c2214000010), (0x0050007080248201, 0x0150121420150100),
    (0x1940528412020041, 0x2a90a81008164413), (0x4c346608300ba040, 0x80092e0a10006200),
    (0x048a082090090030, 0xe80e4c2041e01809), (0x08c2080800420002, 0x1020804088a00501),
    (0x1201251002a04028, 0x2808c80402304806), (0x2010101800800402, 0x0101004202029008),
    (0x1020020020220101, 0x0101200020980400), (0x0030000008480801, 0x0810010080000010),
    (0x400400a004a40202, 0x000800a024091040), (0x2046000648490501, 0x0119708240004096),
    (0x456104828e00c028, 0x3020020800008174), (0x443b411300905010, 0x2010028061c05490),
    (0x20200c0021010020, 0x108800a400118144), (0x0804a40820104140, 0x008c808088219005),
    (0x4010020101800404, 0x04000881000500b0), (0x0130094120800201, 0x244aa05a24c000a2),
    (0x04c60700118958cc, 0x0680a2b148260004), (0x0401088000150022, 0x2441020809201400),
    (0x0080408050820451, 0x0010208200210800), (0x0104082000230900, 0x4820284040024000),
    (0x0101191008044100, 0x8118008028082068), (0x2081200c00493340, 0x2201620282cc4004),
    (0x0198405408520908, 0x1440428010308c40), (0x2140300381e2a04c, 0x2121d08120d10410),
    (0x201004889200408e, 0x40c0800000001000), (0x4008801010084404, 0x0022600004284004),
    (0x481282c08402b20a, 0x804018a820a18d24), (0x09118208d0800201, 0x0c89010288040028),
    (0x0040504a44030180, 0x402002800000002a), (0x0020a202140c2d00, 0x0c02420100800000),
    (0x84c4c820002e08a0, 0x040402111c611c02), (0x1110304e08d08104, 0xd18400814279b145),
    (0x9080808500814002, 0x1801010408802524), (0x2c05122180080804, 0x8e02100c02049110),
    (0x9281040420021002, 0xa0141004000a0002), (0xdb908680044c0d01, 0x7280429909956492),
    (0x0400101010021001, 0x8062080088c08011), (0x200814800a022098, 0x30080c042810c048),
    (0x0008c00148004080, 0xc012042130009100), (0x0000602208004028, 0x0102210008008020),
    (0x0000400100382071, 0x0402008801028060), (0x0002028a08208000, 0x8400402488810040),
    (0x0940904900200401, 0x2200080080800000), (0x126a4e0240400b80, 0x3030280110220000),
    (0x0011008080820050, 0x420a100070109000), (0x9600416140280f00, 0xc2de2340294408e0),
    (0x0064c54001080080, 0x6100808410860004), (0x5091884006014180, 0xd4b4003b0d004c25),
    (0x0082080401410080, 0x0022004c00030000), (0x0060400482001410, 0x00088510a0828002),
    (0x01201c0202023310, 0x0c03a05408000252), (0x0001880100280d21, 0x047ca0601888a544),
    (0x4502c10100060a22, 0xcc84040114284882), (0x40a04622208c0025, 0x0840600048000600),
    (0x4c04200c28040045, 0x1040880038390d05), (0x2120811002002700, 0x2500980000000120),
    (0x1e8c140299030100, 0x880246008308a180), (0x11a5a0a0240249e8, 0x050750c00779c212),
    (0x5008404040203088, 0x48040141020b911d), (0x8180a12022006030, 0x01008c08000001c4),
    (0x002200a080752015, 0x2100100000000028), (0x2348008101322c41, 0x25900004888910c8),
    (0x03580113a0061301, 0x000a57126d682908), (0xa401420c20009b01, 0x04081c1004020c46),
    (0x8200084008424020, 0x1020090000100020), (0x900e1140118300a2, 0xa00440040a096402),
    (0x20c4806418840804, 0x1002020004808100), (0x0801100800500840, 0x0218480103800310),
    (0x0000008c02000444, 0x020420180121a042), (0x300c003010201008, 0x0258088228811110),
    (0x6402040010010222, 0x2408d01210218525), (0x0202002010100042, 0x100208c0010c0200),
    (0x2c0e004002020029, 0x8004104504505900), (0x004c481018140504, 0x0402080100800072),
    (0x10401002060a1042, 0x4008010200000000), (0x588c282004008017, 0x01002042102e0280),
    (0x0882180022008840, 0x010190c106283455), (0x2808b00803202404, 0x1020802581114044),
];

pub(super) static CANNON_RANK_MAGICS: [(u64, u64); INTERSECTIONS] = [
    (0x0080010309000000, 0x0000000000000000), (0x8040214464004240, 0x0000000000000000),
    (0x4020000414001804, 0x0000000000000000), (0x2c80180185a260d6, 0x0000000000000000),
    (0x1008000028802084, 0x0000000000000000), (0x5080300ba0292414, 0x0000000000000000),
    (0xa0804000800000c0, 0x0000000000000000), (0x020110220a3d00b4, 0x0000000000000000),
    (0x80801c2800a40601, 0x0000000000000000), (0x1008a02011182101, 0x0000000000000000),
    (0x8808600005c00000, 0x0000000000000000), (0x100aa00410449809, 0x0000000000000000),
    (0x00080402454000a8, 0x0000000000000000), (0x4004020204040041, 0x0000000000000000),
    (0x0002010028000040, 0x0000000000000000), (0x0001008004002610, 0x0000000000000000),
    (0x2105804410040000, 0x0000000000000000), (0x0049c006d9b62000, 0x0000000000000000),
    (0x800b0408017804a0, 0x0000000000000000), (0x0000080400015800, 0x0000000000000000),
    (0xa2439728004222a2, 0x0000000000000000), (0x91082a48000c44a2, 0x0000000000000000),
    (0x048a058800252690, 0x0000000000000000), (0x2a090108010d001c, 0x0000000000000000),
    (0x0110004020401002, 0x0000000000000000), (0x00040408000c0003, 0x0000000000000000),
    (0x09000410000c1048, 0x0000000000000000), (0x0004d00008080008, 0x0000000000000000),
    (0x008320e006000d00, 0x0000000000000000), (0x2000002900800088, 0x0000000000000000),
    (0x0024004012000402, 0x0000000000000000), (0xa00000104020a080, 0x0000000000000000),
    (0x0040200020100008, 0x0000000000000000), (0x8946001082001040, 0x0000000000000000),
    (0x3001400118040280, 0x0000000000000000), (0x2032a01834000190, 0x0000000000000000),
    (0x1841080000008009, 0x0000000000000000), (0x00a80488001b8002, 0x0000000000000000),
    (0x5012000001228001, 0x0000000000000000), (0x4658814d48848038, 0x0000000000000000),
    (0x4000004070188000, 0x0000000000000000), (0x2004001080180400, 0x0000000000000000),
    (0x8181000510140240, 0x0000000000000000), (0x0000c00001020101, 0x0000000000000000),
    (0x0002080320010088, 0x0000000000000000), (0x20b0103088424460, 0x0000000000000000),
    (0x02089021035ce010, 0x0000000000000000), (0x54808201040000a0, 0x0000000000000000),
    (0x471e000048402520, 0x0000000000000000), (0x60053aa2c1280220, 0x0000000000000000),
    (0x0450046000000201, 0x0000000000000000), (0x622b2914a9006820, 0x0000000000000000),
    (0x0000000000001020, 0x0000000000000000), (0x1010090030018040, 0x0000000000000000),
    (0xe580fb0195815401, 0x0d001000c0440a40), (0x0000006000520601, 0x2080800004020100),
    (0x0216180040940005, 0x4080000000800000), (0x4524231000111406, 0x430188e050124070),
    (0x0380801c028d292d, 0x2080006064068006), (0x000903c425a10541, 0x4840013b02288d04),
    (0x0a88d045024f2471, 0x042484f02904c531), (0x9401000002001801, 0x2613803840c00004),
    (0x8880003042600001, 0x010102002488b0c8), (0x0000000000000000, 0x0802000002050000),
    (0x0000000000000000, 0x0126010004100002), (0x0000000000000000, 0x030080824000000b),
    (0x0000000000000000, 0x0080400830900120), (0x0000000000000000, 0x094020080088e000),
    (0x0000000000000000, 0x0042002104080c01), (0x0000000000000000, 0x0410081040000002),
    (0x0000000000000000, 0xa418051000000020), (0x0000000000000000, 0x0004001802001000),
    (0x0000000000000000, 0x28755010010e0005), (0x0000000000000000, 0x8281e3802a58a009),
    (0x0000000000000000, 0x02814020000000a8), (0x0000000000000000, 0x2080048008c020a0),
    (0x0000000000000000, 0x4400100800904210), (0x0000000000000000, 0x1001508013281c44),
    (0x0000000000000000, 0x00100c0200041000), (0x0000000000000000, 0x2004408020000000),
    (0x0000000000000000, 0x8008190089001080), (0x0000000000000000, 0x040a04002000b009),
    (0x0000000000000000, 0x0101182a60091806), (0x0000000000000000, 0x0110801008000120),
    (0x0000000000000000, 0xc182c50120011984), (0x0000000000000000, 0x821a000620000640),
    (0x0000000000000000, 0x1020000420000880), (0x0000000000000000, 0x0128000820005108),
    (0x0000000000000000, 0x0401481080402800), (0x0000000000000000, 0x0320a90440280020),
];

pub(super) static CANNON_FILE_MAGICS: [(u64, u64); INTERSECTIONS] = [
    (0x000800804201200c, 0x00c0040082084060), (0x5002002044040924, 0x0281201400400004),
    (0x0004089030134801, 0x0346180080904b20), (0x0101000448010201, 0x2020855220404001),
    (0x1120200888041200, 0x8404040018000200), (0x4040021100820040, 0x0808144100080004),
    (0x0010280801020044, 0x2080d9044009008c), (0x0520080024200505, 0x1400408040001012),
    (0x0004004008180402, 0x0202004014040400), (0x400c00081c180808, 0x0040842180040002),
    (0x8080313454101804, 0x08a0160100001280), (0x0208020050080011, 0x4200808040000240),
    (0x1300a02020006445, 0x0302004300105a80), (0x0401001000422200, 0x082902000a1e0480),
    (0x0028520208000420, 0x0414001100110090), (0x080489208800a010, 0x0020408040000008),
    (0x12800404003410c0, 0x80e2202001000032), (0x01c000011020300d, 0x3800032002800a00),
    (0x0408004040661008, 0x040408112008a020), (0x8840854690088201, 0x9404400800446051),
    (0xa10020014014000a, 0x1008080094000020), (0x0080100000805101, 0x0004080080420004),
    (0x0220068020050030, 0x20020400240200c0), (0x04800c0110010002, 0x80418a0010402000),
    (0x0008400004801010, 0x2002002400a80700), (0x818004002c000201, 0x415100a01a103000),
    (0x11800280d010402c, 0x2a0012a802c408a8), (0x0081080000021201, 0x04808b1000061401),
    (0x01020100013040a2, 0x0008400101088060), (0x0400420000088201, 0x0088004008820000),
    (0x0c00080403031201, 0x462c108080834c06), (0x00c9200402040200, 0x3004420088040a20),
    (0x5020410400003080, 0x0804040022004202), (0x0100101080000c60, 0x2004801000840000),
    (0x00104a0240400120, 0x0204000210008041), (0x0302100210000801, 0x0801402010220301),
    (0x2422080084001404, 0x0502020805000004), (0x4a00204100008801, 0x1201080040100002),
    (0x0808001050080009, 0x0008048011400002), (0x0102008801080905, 0x0010002480400000),
    (0x0802120404014014, 0x1808040088391042), (0x0141000204120240, 0x41080008e0002800),
    (0x254c800c860034d0, 0x10204100480382b8), (0x8001200100100110, 0x218401a000840000),
    (0x0068080409002114, 0x0040040220000012), (0x0602004600100004, 0x0080030020800001),
    (0x2020201010020084, 0x0620005400400002), (0x102410082410000a, 0x0288040a00802251),
    (0x891008080c080009, 0x00d00c4080400202), (0x00210001a0003100, 0xe006010010001000),
    (0xc100044002828860, 0x1808014001004011), (0x1145020208001000, 0x0021010020000210),
    (0x0100184540a84003, 0x0100801820040009), (0x2140200061805801, 0x804040010020400c),
    (0x1414002080400600, 0x4002800444212000), (0x0205001006400802, 0x0040404a00000000),
    (0x1200204105010400, 0x0080042600641054), (0x0221208044100100, 0x2285009280000000),
    (0x010308248a080100, 0x400800c004004011), (0x0208406100140020, 0x0048002010002044),
    (0x0408410404003080, 0x08a2002048800004), (0x8080009000809109, 0x4762604004022402),
    (0x0002260800a20301, 0x8044801010000820), (0x040a820024080421, 0x0000402004252000),
    (0x0088404005400201, 0x02088a0800012800), (0xc808000288040033, 0x122c810060608050),
    (0x2202005009040209, 0x00000010a0084064), (0x2084102010033002, 0x8002150008010008),
    (0x0400802801202010, 0x1000800484002080), (0x0200431000200210, 0xc2020d8004000084),
    (0x21800c0131010002, 0x012141a0091060ae), (0x04c000c200200201, 0x05002441a0000258),
    (0x01120a00400408a4, 0x0200000081102001), (0x0088005040040084, 0x1209201600400402),
    (0x2881402c60220801, 0x8410090b981108c0), (0x8060a04024001111, 0x50280cc2001240c0),
    (0x2801489801010084, 0x0890004080004292), (0x0080114008001010, 0x1880820840200288),
    (0x0002400803020082, 0x1040400208010001), (0x616000834a000804, 0x9403140840055d84),
    (0x0408040200420160, 0xe140080030000042), (0x0810a80004020809, 0x4500040050010802),
    (0x5d02604160200404, 0x4a8800c0100a9051), (0x2000800410002a41, 0x0842080001000000),
    (0x4400800824009211, 0x8220062000102109), (0x8400902808081200, 0x0224000800020801),
    (0x0080144008810030, 0x01c8008900804000), (0x50801a2006084004, 0x2600110017d00292),
    (0x000c129200044004, 0x0800210000102002), (0x804a10000a000801, 0x0200441044001004),
];
