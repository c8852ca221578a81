/* DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED BY:
 *
 *  emoji-generate sequences data --chars
 *
 * emoji-generate is available on crates.io.
 */

pub const UNICODE_EMOJI_DATE: &'static str = "2023-06-05, 20:04:50 GMT";

pub const EMOJI_SEQUENCES: &'static [(&'static [char], &'static str)] = &[
  (&['\u{23}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> #\u{fe0f}\u{20e3}"),
  (&['\u{2a}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> *\u{fe0f}\u{20e3}"),
  (&['\u{30}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 0\u{fe0f}\u{20e3}"),
  (&['\u{31}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 1\u{fe0f}\u{20e3}"),
  (&['\u{32}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 2\u{fe0f}\u{20e3}"),
  (&['\u{33}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 3\u{fe0f}\u{20e3}"),
  (&['\u{34}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 4\u{fe0f}\u{20e3}"),
  (&['\u{35}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 5\u{fe0f}\u{20e3}"),
  (&['\u{36}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 6\u{fe0f}\u{20e3}"),
  (&['\u{37}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 7\u{fe0f}\u{20e3}"),
  (&['\u{38}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 8\u{fe0f}\u{20e3}"),
  (&['\u{39}', '\u{fe0f}', '\u{20e3}'], "Emoji_Keycap_Sequence ==> 9\u{fe0f}\u{20e3}"),
  (&['\u{a9}', '\u{fe0f}'], "Basic_Emoji ==> \u{a9}\u{fe0f}"),
  (&['\u{ae}', '\u{fe0f}'], "Basic_Emoji ==> \u{ae}\u{fe0f}"),
  (&['\u{203c}', '\u{fe0f}'], "Basic_Emoji ==> \u{203c}\u{fe0f}"),
  (&['\u{2122}', '\u{fe0f}'], "Basic_Emoji ==> \u{2122}\u{fe0f}"),
  (&['\u{2194}', '\u{fe0f}'], "Basic_Emoji ==> \u{2194}\u{fe0f}"),
  (&['\u{231a}'], "Basic_Emoji ==> \u{231a}"),
  (&['\u{231a}', '\u{fe0e}'], "Basic_Emoji ==> \u{231a}"),
  (&['\u{231b}'], "Basic_Emoji ==> \u{231b}"),
  (&['\u{231b}', '\u{fe0e}'], "Basic_Emoji ==> \u{231b}"),
  (&['\u{23e9}'], "Basic_Emoji ==> \u{23e9}"),
  (&['\u{23e9}', '\u{fe0e}'], "Basic_Emoji ==> \u{23e9}"),
  (&['\u{23ea}'], "Basic_Emoji ==> \u{23ea}"),
  (&['\u{23ea}', '\u{fe0e}'], "Basic_Emoji ==> \u{23ea}"),
  (&['\u{23eb}'], "Basic_Emoji ==> \u{23eb}"),
  (&['\u{23eb}', '\u{fe0e}'], "Basic_Emoji ==> \u{23eb}"),
  (&['\u{23ec}'], "Basic_Emoji ==> \u{23ec}"),
  (&['\u{23ec}', '\u{fe0e}'], "Basic_Emoji ==> \u{23ec}"),
  (&['\u{23f0}'], "Basic_Emoji ==> \u{23f0}"),
  (&['\u{23f0}', '\u{fe0e}'], "Basic_Emoji ==> \u{23f0}"),
  (&['\u{23f3}'], "Basic_Emoji ==> \u{23f3}"),
  (&['\u{23f3}', '\u{fe0e}'], "Basic_Emoji ==> \u{23f3}"),
  (&['\u{25fd}'], "Basic_Emoji ==> \u{25fd}"),
  (&['\u{25fd}', '\u{fe0e}'], "Basic_Emoji ==> \u{25fd}"),
  (&['\u{25fe}'], "Basic_Emoji ==> \u{25fe}"),
  (&['\u{25fe}', '\u{fe0e}'], "Basic_Emoji ==> \u{25fe}"),
  (&['\u{2600}', '\u{fe0f}'], "Basic_Emoji ==> \u{2600}\u{fe0f}"),
  (&['\u{2601}', '\u{fe0f}'], "Basic_Emoji ==> \u{2601}\u{fe0f}"),
  (&['\u{2614}'], "Basic_Emoji ==> \u{2614}"),
  (&['\u{2614}', '\u{fe0e}'], "Basic_Emoji ==> \u{2614}"),
  (&['\u{2615}'], "Basic_Emoji ==> \u{2615}"),
  (&['\u{2615}', '\u{fe0e}'], "Basic_Emoji ==> \u{2615}"),
  (&['\u{261d}', '\u{fe0f}'], "Basic_Emoji ==> \u{261d}\u{fe0f}"),
  (&['\u{261d}', '\u{1f3fb}'], "RGI_Emoji_Modifier_Sequence ==> \u{261d}\u{1f3fb}"),
  (&['\u{261d}', '\u{1f3fc}'], "RGI_Emoji_Modifier_Sequence ==> \u{261d}\u{1f3fc}"),
  (&['\u{261d}', '\u{1f3fd}'], "RGI_Emoji_Modifier_Sequence ==> \u{261d}\u{1f3fd}"),
  (&['\u{261d}', '\u{1f3fe}'], "RGI_Emoji_Modifier_Sequence ==> \u{261d}\u{1f3fe}"),
  (&['\u{261d}', '\u{1f3ff}'], "RGI_Emoji_Modifier_Sequence ==> \u{261d}\u{1f3ff}"),
  (&['\u{2620}', '\u{fe0f}'], "Basic_Emoji ==> \u{2620}\u{fe0f}"),
  (&['\u{2639}', '\u{fe0f}'], "Basic_Emoji ==> \u{2639}\u{fe0f}"),
  (&['\u{263a}', '\u{fe0f}'], "Basic_Emoji ==> \u{263a}\u{fe0f}"),
  (&['\u{2640}', '\u{fe0f}'], "Basic_Emoji ==> \u{2640}\u{fe0f}"),
  (&['\u{2642}', '\u{fe0f}'], "Basic_Emoji ==> \u{2642}\u{fe0f}"),
  (&['\u{26a1}'], "Basic_Emoji ==> \u{26a1}"),
  (&['\u{26a1}', '\u{fe0e}'], "Basic_Emoji ==> \u{26a1}"),
  (&['\u{2705}'], "Basic_Emoji ==> \u{2705}"),
  (&['\u{2705}', '\u{fe0e}'], "Basic_Emoji ==> \u{2705}"),
  (&['\u{2708}', '\u{fe0f}'], "Basic_Emoji ==> \u{2708}\u{fe0f}"),
  (&['\u{2728}'], "Basic_Emoji ==> \u{2728}"),
  (&['\u{2728}', '\u{fe0e}'], "Basic_Emoji ==> \u{2728}"),
  (&['\u{2744}', '\u{fe0f}'], "Basic_Emoji ==> \u{2744}\u{fe0f}"),
  (&['\u{274c}'], "Basic_Emoji ==> \u{274c}"),
  (&['\u{274c}', '\u{fe0e}'], "Basic_Emoji ==> \u{274c}"),
  (&['\u{2764}', '\u{fe0f}'], "Basic_Emoji ==> \u{2764}\u{fe0f}"),
  (&['\u{2764}', '\u{fe0f}', '\u{200d}', '\u{1f525}'], "RGI_Emoji_ZWJ_Sequence ==> \u{2764}\u{fe0f}\u{200d}\u{1f525}"),
  (&['\u{2b06}', '\u{fe0f}'], "Basic_Emoji ==> \u{2b06}\u{fe0f}"),
  (&['\u{2b50}'], "Basic_Emoji ==> \u{2b50}"),
  (&['\u{2b50}', '\u{fe0e}'], "Basic_Emoji ==> \u{2b50}"),
  (&['\u{1f004}'], "Basic_Emoji ==> \u{1f004}"),
  (&['\u{1f004}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f004}"),
  (&['\u{1f0cf}'], "Basic_Emoji ==> \u{1f0cf}"),
  (&['\u{1f0cf}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f0cf}"),
  (&['\u{1f1e8}', '\u{1f1e6}'], "RGI_Emoji_Flag_Sequence ==> \u{1f1e8}\u{1f1e6}"),
  (&['\u{1f1e9}', '\u{1f1ea}'], "RGI_Emoji_Flag_Sequence ==> \u{1f1e9}\u{1f1ea}"),
  (&['\u{1f1eb}', '\u{1f1f7}'], "RGI_Emoji_Flag_Sequence ==> \u{1f1eb}\u{1f1f7}"),
  (&['\u{1f1ec}', '\u{1f1e7}'], "RGI_Emoji_Flag_Sequence ==> \u{1f1ec}\u{1f1e7}"),
  (&['\u{1f1ef}', '\u{1f1f5}'], "RGI_Emoji_Flag_Sequence ==> \u{1f1ef}\u{1f1f5}"),
  (&['\u{1f1fa}', '\u{1f1f8}'], "RGI_Emoji_Flag_Sequence ==> \u{1f1fa}\u{1f1f8}"),
  (&['\u{1f300}'], "Basic_Emoji ==> \u{1f300}"),
  (&['\u{1f300}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f300}"),
  (&['\u{1f301}'], "Basic_Emoji ==> \u{1f301}"),
  (&['\u{1f301}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f301}"),
  (&['\u{1f302}'], "Basic_Emoji ==> \u{1f302}"),
  (&['\u{1f302}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f302}"),
  (&['\u{1f303}'], "Basic_Emoji ==> \u{1f303}"),
  (&['\u{1f303}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f303}"),
  (&['\u{1f304}'], "Basic_Emoji ==> \u{1f304}"),
  (&['\u{1f304}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f304}"),
  (&['\u{1f305}'], "Basic_Emoji ==> \u{1f305}"),
  (&['\u{1f305}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f305}"),
  (&['\u{1f306}'], "Basic_Emoji ==> \u{1f306}"),
  (&['\u{1f306}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f306}"),
  (&['\u{1f307}'], "Basic_Emoji ==> \u{1f307}"),
  (&['\u{1f307}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f307}"),
  (&['\u{1f308}'], "Basic_Emoji ==> \u{1f308}"),
  (&['\u{1f308}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f308}"),
  (&['\u{1f309}'], "Basic_Emoji ==> \u{1f309}"),
  (&['\u{1f309}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f309}"),
  (&['\u{1f30a}'], "Basic_Emoji ==> \u{1f30a}"),
  (&['\u{1f30a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f30a}"),
  (&['\u{1f30b}'], "Basic_Emoji ==> \u{1f30b}"),
  (&['\u{1f30b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f30b}"),
  (&['\u{1f30c}'], "Basic_Emoji ==> \u{1f30c}"),
  (&['\u{1f30c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f30c}"),
  (&['\u{1f30d}'], "Basic_Emoji ==> \u{1f30d}"),
  (&['\u{1f30d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f30d}"),
  (&['\u{1f30e}'], "Basic_Emoji ==> \u{1f30e}"),
  (&['\u{1f30e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f30e}"),
  (&['\u{1f30f}'], "Basic_Emoji ==> \u{1f30f}"),
  (&['\u{1f30f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f30f}"),
  (&['\u{1f310}'], "Basic_Emoji ==> \u{1f310}"),
  (&['\u{1f310}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f310}"),
  (&['\u{1f311}'], "Basic_Emoji ==> \u{1f311}"),
  (&['\u{1f311}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f311}"),
  (&['\u{1f312}'], "Basic_Emoji ==> \u{1f312}"),
  (&['\u{1f312}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f312}"),
  (&['\u{1f313}'], "Basic_Emoji ==> \u{1f313}"),
  (&['\u{1f313}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f313}"),
  (&['\u{1f314}'], "Basic_Emoji ==> \u{1f314}"),
  (&['\u{1f314}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f314}"),
  (&['\u{1f315}'], "Basic_Emoji ==> \u{1f315}"),
  (&['\u{1f315}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f315}"),
  (&['\u{1f316}'], "Basic_Emoji ==> \u{1f316}"),
  (&['\u{1f316}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f316}"),
  (&['\u{1f317}'], "Basic_Emoji ==> \u{1f317}"),
  (&['\u{1f317}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f317}"),
  (&['\u{1f318}'], "Basic_Emoji ==> \u{1f318}"),
  (&['\u{1f318}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f318}"),
  (&['\u{1f319}'], "Basic_Emoji ==> \u{1f319}"),
  (&['\u{1f319}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f319}"),
  (&['\u{1f31a}'], "Basic_Emoji ==> \u{1f31a}"),
  (&['\u{1f31a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f31a}"),
  (&['\u{1f31b}'], "Basic_Emoji ==> \u{1f31b}"),
  (&['\u{1f31b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f31b}"),
  (&['\u{1f31c}'], "Basic_Emoji ==> \u{1f31c}"),
  (&['\u{1f31c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f31c}"),
  (&['\u{1f31d}'], "Basic_Emoji ==> \u{1f31d}"),
  (&['\u{1f31d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f31d}"),
  (&['\u{1f31e}'], "Basic_Emoji ==> \u{1f31e}"),
  (&['\u{1f31e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f31e}"),
  (&['\u{1f31f}'], "Basic_Emoji ==> \u{1f31f}"),
  (&['\u{1f31f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f31f}"),
  (&['\u{1f320}'], "Basic_Emoji ==> \u{1f320}"),
  (&['\u{1f320}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f320}"),
  (&['\u{1f32b}', '\u{fe0f}'], "Basic_Emoji ==> \u{1f32b}\u{fe0f}"),
  (&['\u{1f345}'], "Basic_Emoji ==> \u{1f345}"),
  (&['\u{1f345}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f345}"),
  (&['\u{1f346}'], "Basic_Emoji ==> \u{1f346}"),
  (&['\u{1f346}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f346}"),
  (&['\u{1f347}'], "Basic_Emoji ==> \u{1f347}"),
  (&['\u{1f347}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f347}"),
  (&['\u{1f348}'], "Basic_Emoji ==> \u{1f348}"),
  (&['\u{1f348}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f348}"),
  (&['\u{1f349}'], "Basic_Emoji ==> \u{1f349}"),
  (&['\u{1f349}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f349}"),
  (&['\u{1f34a}'], "Basic_Emoji ==> \u{1f34a}"),
  (&['\u{1f34a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f34a}"),
  (&['\u{1f34b}'], "Basic_Emoji ==> \u{1f34b}"),
  (&['\u{1f34b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f34b}"),
  (&['\u{1f34c}'], "Basic_Emoji ==> \u{1f34c}"),
  (&['\u{1f34c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f34c}"),
  (&['\u{1f34d}'], "Basic_Emoji ==> \u{1f34d}"),
  (&['\u{1f34d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f34d}"),
  (&['\u{1f34e}'], "Basic_Emoji ==> \u{1f34e}"),
  (&['\u{1f34e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f34e}"),
  (&['\u{1f34f}'], "Basic_Emoji ==> \u{1f34f}"),
  (&['\u{1f34f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f34f}"),
  (&['\u{1f389}'], "Basic_Emoji ==> \u{1f389}"),
  (&['\u{1f389}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f389}"),
  (&['\u{1f3f3}', '\u{fe0f}'], "Basic_Emoji ==> \u{1f3f3}\u{fe0f}"),
  (&['\u{1f3f3}', '\u{fe0f}', '\u{200d}', '\u{1f308}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f3f3}\u{fe0f}\u{200d}\u{1f308}"),
  (&['\u{1f3f4}'], "Basic_Emoji ==> \u{1f3f4}"),
  (&['\u{1f3f4}', '\u{200d}', '\u{2620}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f3f4}\u{200d}\u{2620}\u{fe0f}"),
  (&['\u{1f3f4}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f3f4}"),
  (&['\u{1f3f4}', '\u{e0067}', '\u{e0062}', '\u{e0065}', '\u{e006e}', '\u{e0067}', '\u{e007f}'], "RGI_Emoji_Tag_Sequence ==> \u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}"),
  (&['\u{1f3f4}', '\u{e0067}', '\u{e0062}', '\u{e0073}', '\u{e0063}', '\u{e0074}', '\u{e007f}'], "RGI_Emoji_Tag_Sequence ==> \u{1f3f4}\u{e0067}\u{e0062}\u{e0073}\u{e0063}\u{e0074}\u{e007f}"),
  (&['\u{1f3f4}', '\u{e0067}', '\u{e0062}', '\u{e0077}', '\u{e006c}', '\u{e0073}', '\u{e007f}'], "RGI_Emoji_Tag_Sequence ==> \u{1f3f4}\u{e0067}\u{e0062}\u{e0077}\u{e006c}\u{e0073}\u{e007f}"),
  (&['\u{1f3fb}'], "Basic_Emoji ==> \u{1f3fb}"),
  (&['\u{1f3fb}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f3fb}"),
  (&['\u{1f3fc}'], "Basic_Emoji ==> \u{1f3fc}"),
  (&['\u{1f3fc}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f3fc}"),
  (&['\u{1f3fd}'], "Basic_Emoji ==> \u{1f3fd}"),
  (&['\u{1f3fd}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f3fd}"),
  (&['\u{1f3fe}'], "Basic_Emoji ==> \u{1f3fe}"),
  (&['\u{1f3fe}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f3fe}"),
  (&['\u{1f3ff}'], "Basic_Emoji ==> \u{1f3ff}"),
  (&['\u{1f3ff}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f3ff}"),
  (&['\u{1f400}'], "Basic_Emoji ==> \u{1f400}"),
  (&['\u{1f400}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f400}"),
  (&['\u{1f401}'], "Basic_Emoji ==> \u{1f401}"),
  (&['\u{1f401}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f401}"),
  (&['\u{1f402}'], "Basic_Emoji ==> \u{1f402}"),
  (&['\u{1f402}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f402}"),
  (&['\u{1f403}'], "Basic_Emoji ==> \u{1f403}"),
  (&['\u{1f403}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f403}"),
  (&['\u{1f404}'], "Basic_Emoji ==> \u{1f404}"),
  (&['\u{1f404}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f404}"),
  (&['\u{1f405}'], "Basic_Emoji ==> \u{1f405}"),
  (&['\u{1f405}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f405}"),
  (&['\u{1f406}'], "Basic_Emoji ==> \u{1f406}"),
  (&['\u{1f406}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f406}"),
  (&['\u{1f407}'], "Basic_Emoji ==> \u{1f407}"),
  (&['\u{1f407}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f407}"),
  (&['\u{1f408}'], "Basic_Emoji ==> \u{1f408}"),
  (&['\u{1f408}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f408}"),
  (&['\u{1f409}'], "Basic_Emoji ==> \u{1f409}"),
  (&['\u{1f409}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f409}"),
  (&['\u{1f40a}'], "Basic_Emoji ==> \u{1f40a}"),
  (&['\u{1f40a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f40a}"),
  (&['\u{1f40b}'], "Basic_Emoji ==> \u{1f40b}"),
  (&['\u{1f40b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f40b}"),
  (&['\u{1f40c}'], "Basic_Emoji ==> \u{1f40c}"),
  (&['\u{1f40c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f40c}"),
  (&['\u{1f40d}'], "Basic_Emoji ==> \u{1f40d}"),
  (&['\u{1f40d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f40d}"),
  (&['\u{1f40e}'], "Basic_Emoji ==> \u{1f40e}"),
  (&['\u{1f40e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f40e}"),
  (&['\u{1f40f}'], "Basic_Emoji ==> \u{1f40f}"),
  (&['\u{1f40f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f40f}"),
  (&['\u{1f410}'], "Basic_Emoji ==> \u{1f410}"),
  (&['\u{1f410}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f410}"),
  (&['\u{1f411}'], "Basic_Emoji ==> \u{1f411}"),
  (&['\u{1f411}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f411}"),
  (&['\u{1f412}'], "Basic_Emoji ==> \u{1f412}"),
  (&['\u{1f412}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f412}"),
  (&['\u{1f413}'], "Basic_Emoji ==> \u{1f413}"),
  (&['\u{1f413}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f413}"),
  (&['\u{1f414}'], "Basic_Emoji ==> \u{1f414}"),
  (&['\u{1f414}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f414}"),
  (&['\u{1f415}'], "Basic_Emoji ==> \u{1f415}"),
  (&['\u{1f415}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f415}"),
  (&['\u{1f416}'], "Basic_Emoji ==> \u{1f416}"),
  (&['\u{1f416}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f416}"),
  (&['\u{1f417}'], "Basic_Emoji ==> \u{1f417}"),
  (&['\u{1f417}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f417}"),
  (&['\u{1f418}'], "Basic_Emoji ==> \u{1f418}"),
  (&['\u{1f418}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f418}"),
  (&['\u{1f419}'], "Basic_Emoji ==> \u{1f419}"),
  (&['\u{1f419}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f419}"),
  (&['\u{1f41a}'], "Basic_Emoji ==> \u{1f41a}"),
  (&['\u{1f41a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f41a}"),
  (&['\u{1f41b}'], "Basic_Emoji ==> \u{1f41b}"),
  (&['\u{1f41b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f41b}"),
  (&['\u{1f41c}'], "Basic_Emoji ==> \u{1f41c}"),
  (&['\u{1f41c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f41c}"),
  (&['\u{1f41d}'], "Basic_Emoji ==> \u{1f41d}"),
  (&['\u{1f41d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f41d}"),
  (&['\u{1f41e}'], "Basic_Emoji ==> \u{1f41e}"),
  (&['\u{1f41e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f41e}"),
  (&['\u{1f41f}'], "Basic_Emoji ==> \u{1f41f}"),
  (&['\u{1f41f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f41f}"),
  (&['\u{1f420}'], "Basic_Emoji ==> \u{1f420}"),
  (&['\u{1f420}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f420}"),
  (&['\u{1f421}'], "Basic_Emoji ==> \u{1f421}"),
  (&['\u{1f421}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f421}"),
  (&['\u{1f422}'], "Basic_Emoji ==> \u{1f422}"),
  (&['\u{1f422}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f422}"),
  (&['\u{1f423}'], "Basic_Emoji ==> \u{1f423}"),
  (&['\u{1f423}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f423}"),
  (&['\u{1f424}'], "Basic_Emoji ==> \u{1f424}"),
  (&['\u{1f424}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f424}"),
  (&['\u{1f425}'], "Basic_Emoji ==> \u{1f425}"),
  (&['\u{1f425}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f425}"),
  (&['\u{1f426}'], "Basic_Emoji ==> \u{1f426}"),
  (&['\u{1f426}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f426}"),
  (&['\u{1f427}'], "Basic_Emoji ==> \u{1f427}"),
  (&['\u{1f427}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f427}"),
  (&['\u{1f428}'], "Basic_Emoji ==> \u{1f428}"),
  (&['\u{1f428}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f428}"),
  (&['\u{1f429}'], "Basic_Emoji ==> \u{1f429}"),
  (&['\u{1f429}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f429}"),
  (&['\u{1f42a}'], "Basic_Emoji ==> \u{1f42a}"),
  (&['\u{1f42a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f42a}"),
  (&['\u{1f42b}'], "Basic_Emoji ==> \u{1f42b}"),
  (&['\u{1f42b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f42b}"),
  (&['\u{1f42c}'], "Basic_Emoji ==> \u{1f42c}"),
  (&['\u{1f42c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f42c}"),
  (&['\u{1f42d}'], "Basic_Emoji ==> \u{1f42d}"),
  (&['\u{1f42d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f42d}"),
  (&['\u{1f42e}'], "Basic_Emoji ==> \u{1f42e}"),
  (&['\u{1f42e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f42e}"),
  (&['\u{1f42f}'], "Basic_Emoji ==> \u{1f42f}"),
  (&['\u{1f42f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f42f}"),
  (&['\u{1f430}'], "Basic_Emoji ==> \u{1f430}"),
  (&['\u{1f430}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f430}"),
  (&['\u{1f431}'], "Basic_Emoji ==> \u{1f431}"),
  (&['\u{1f431}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f431}"),
  (&['\u{1f432}'], "Basic_Emoji ==> \u{1f432}"),
  (&['\u{1f432}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f432}"),
  (&['\u{1f433}'], "Basic_Emoji ==> \u{1f433}"),
  (&['\u{1f433}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f433}"),
  (&['\u{1f434}'], "Basic_Emoji ==> \u{1f434}"),
  (&['\u{1f434}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f434}"),
  (&['\u{1f435}'], "Basic_Emoji ==> \u{1f435}"),
  (&['\u{1f435}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f435}"),
  (&['\u{1f436}'], "Basic_Emoji ==> \u{1f436}"),
  (&['\u{1f436}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f436}"),
  (&['\u{1f437}'], "Basic_Emoji ==> \u{1f437}"),
  (&['\u{1f437}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f437}"),
  (&['\u{1f438}'], "Basic_Emoji ==> \u{1f438}"),
  (&['\u{1f438}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f438}"),
  (&['\u{1f439}'], "Basic_Emoji ==> \u{1f439}"),
  (&['\u{1f439}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f439}"),
  (&['\u{1f43a}'], "Basic_Emoji ==> \u{1f43a}"),
  (&['\u{1f43a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f43a}"),
  (&['\u{1f43b}'], "Basic_Emoji ==> \u{1f43b}"),
  (&['\u{1f43b}', '\u{200d}', '\u{2744}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f43b}\u{200d}\u{2744}\u{fe0f}"),
  (&['\u{1f43b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f43b}"),
  (&['\u{1f43c}'], "Basic_Emoji ==> \u{1f43c}"),
  (&['\u{1f43c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f43c}"),
  (&['\u{1f43d}'], "Basic_Emoji ==> \u{1f43d}"),
  (&['\u{1f43d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f43d}"),
  (&['\u{1f43e}'], "Basic_Emoji ==> \u{1f43e}"),
  (&['\u{1f43e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f43e}"),
  (&['\u{1f44b}'], "Basic_Emoji ==> \u{1f44b}"),
  (&['\u{1f44b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f44b}"),
  (&['\u{1f44b}', '\u{1f3fb}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44b}\u{1f3fb}"),
  (&['\u{1f44b}', '\u{1f3fc}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44b}\u{1f3fc}"),
  (&['\u{1f44b}', '\u{1f3fd}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44b}\u{1f3fd}"),
  (&['\u{1f44b}', '\u{1f3fe}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44b}\u{1f3fe}"),
  (&['\u{1f44b}', '\u{1f3ff}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44b}\u{1f3ff}"),
  (&['\u{1f44d}'], "Basic_Emoji ==> \u{1f44d}"),
  (&['\u{1f44d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f44d}"),
  (&['\u{1f44d}', '\u{1f3fb}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44d}\u{1f3fb}"),
  (&['\u{1f44d}', '\u{1f3fc}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44d}\u{1f3fc}"),
  (&['\u{1f44d}', '\u{1f3fd}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44d}\u{1f3fd}"),
  (&['\u{1f44d}', '\u{1f3fe}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44d}\u{1f3fe}"),
  (&['\u{1f44d}', '\u{1f3ff}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f44d}\u{1f3ff}"),
  (&['\u{1f466}'], "Basic_Emoji ==> \u{1f466}"),
  (&['\u{1f466}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f466}"),
  (&['\u{1f467}'], "Basic_Emoji ==> \u{1f467}"),
  (&['\u{1f467}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f467}"),
  (&['\u{1f468}'], "Basic_Emoji ==> \u{1f468}"),
  (&['\u{1f468}', '\u{200d}', '\u{2764}', '\u{fe0f}', '\u{200d}', '\u{1f468}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f468}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f468}"),
  (&['\u{1f468}', '\u{200d}', '\u{1f469}', '\u{200d}', '\u{1f466}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f466}"),
  (&['\u{1f468}', '\u{200d}', '\u{1f469}', '\u{200d}', '\u{1f467}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}"),
  (&['\u{1f468}', '\u{200d}', '\u{1f469}', '\u{200d}', '\u{1f467}', '\u{200d}', '\u{1f466}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}\u{200d}\u{1f466}"),
  (&['\u{1f468}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f468}"),
  (&['\u{1f469}'], "Basic_Emoji ==> \u{1f469}"),
  (&['\u{1f469}', '\u{200d}', '\u{2764}', '\u{fe0f}', '\u{200d}', '\u{1f468}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f469}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f468}"),
  (&['\u{1f469}', '\u{200d}', '\u{1f680}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f469}\u{200d}\u{1f680}"),
  (&['\u{1f469}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f469}"),
  (&['\u{1f48b}'], "Basic_Emoji ==> \u{1f48b}"),
  (&['\u{1f48b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f48b}"),
  (&['\u{1f4a8}'], "Basic_Emoji ==> \u{1f4a8}"),
  (&['\u{1f4a8}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f4a8}"),
  (&['\u{1f4a9}'], "Basic_Emoji ==> \u{1f4a9}"),
  (&['\u{1f4a9}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f4a9}"),
  (&['\u{1f525}'], "Basic_Emoji ==> \u{1f525}"),
  (&['\u{1f525}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f525}"),
  (&['\u{1f600}'], "Basic_Emoji ==> \u{1f600}"),
  (&['\u{1f600}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f600}"),
  (&['\u{1f601}'], "Basic_Emoji ==> \u{1f601}"),
  (&['\u{1f601}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f601}"),
  (&['\u{1f602}'], "Basic_Emoji ==> \u{1f602}"),
  (&['\u{1f602}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f602}"),
  (&['\u{1f603}'], "Basic_Emoji ==> \u{1f603}"),
  (&['\u{1f603}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f603}"),
  (&['\u{1f604}'], "Basic_Emoji ==> \u{1f604}"),
  (&['\u{1f604}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f604}"),
  (&['\u{1f605}'], "Basic_Emoji ==> \u{1f605}"),
  (&['\u{1f605}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f605}"),
  (&['\u{1f606}'], "Basic_Emoji ==> \u{1f606}"),
  (&['\u{1f606}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f606}"),
  (&['\u{1f607}'], "Basic_Emoji ==> \u{1f607}"),
  (&['\u{1f607}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f607}"),
  (&['\u{1f608}'], "Basic_Emoji ==> \u{1f608}"),
  (&['\u{1f608}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f608}"),
  (&['\u{1f609}'], "Basic_Emoji ==> \u{1f609}"),
  (&['\u{1f609}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f609}"),
  (&['\u{1f60a}'], "Basic_Emoji ==> \u{1f60a}"),
  (&['\u{1f60a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f60a}"),
  (&['\u{1f60b}'], "Basic_Emoji ==> \u{1f60b}"),
  (&['\u{1f60b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f60b}"),
  (&['\u{1f60c}'], "Basic_Emoji ==> \u{1f60c}"),
  (&['\u{1f60c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f60c}"),
  (&['\u{1f60d}'], "Basic_Emoji ==> \u{1f60d}"),
  (&['\u{1f60d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f60d}"),
  (&['\u{1f60e}'], "Basic_Emoji ==> \u{1f60e}"),
  (&['\u{1f60e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f60e}"),
  (&['\u{1f60f}'], "Basic_Emoji ==> \u{1f60f}"),
  (&['\u{1f60f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f60f}"),
  (&['\u{1f610}'], "Basic_Emoji ==> \u{1f610}"),
  (&['\u{1f610}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f610}"),
  (&['\u{1f611}'], "Basic_Emoji ==> \u{1f611}"),
  (&['\u{1f611}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f611}"),
  (&['\u{1f612}'], "Basic_Emoji ==> \u{1f612}"),
  (&['\u{1f612}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f612}"),
  (&['\u{1f613}'], "Basic_Emoji ==> \u{1f613}"),
  (&['\u{1f613}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f613}"),
  (&['\u{1f614}'], "Basic_Emoji ==> \u{1f614}"),
  (&['\u{1f614}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f614}"),
  (&['\u{1f615}'], "Basic_Emoji ==> \u{1f615}"),
  (&['\u{1f615}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f615}"),
  (&['\u{1f616}'], "Basic_Emoji ==> \u{1f616}"),
  (&['\u{1f616}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f616}"),
  (&['\u{1f617}'], "Basic_Emoji ==> \u{1f617}"),
  (&['\u{1f617}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f617}"),
  (&['\u{1f618}'], "Basic_Emoji ==> \u{1f618}"),
  (&['\u{1f618}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f618}"),
  (&['\u{1f619}'], "Basic_Emoji ==> \u{1f619}"),
  (&['\u{1f619}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f619}"),
  (&['\u{1f61a}'], "Basic_Emoji ==> \u{1f61a}"),
  (&['\u{1f61a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f61a}"),
  (&['\u{1f61b}'], "Basic_Emoji ==> \u{1f61b}"),
  (&['\u{1f61b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f61b}"),
  (&['\u{1f61c}'], "Basic_Emoji ==> \u{1f61c}"),
  (&['\u{1f61c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f61c}"),
  (&['\u{1f61d}'], "Basic_Emoji ==> \u{1f61d}"),
  (&['\u{1f61d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f61d}"),
  (&['\u{1f61e}'], "Basic_Emoji ==> \u{1f61e}"),
  (&['\u{1f61e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f61e}"),
  (&['\u{1f61f}'], "Basic_Emoji ==> \u{1f61f}"),
  (&['\u{1f61f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f61f}"),
  (&['\u{1f620}'], "Basic_Emoji ==> \u{1f620}"),
  (&['\u{1f620}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f620}"),
  (&['\u{1f621}'], "Basic_Emoji ==> \u{1f621}"),
  (&['\u{1f621}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f621}"),
  (&['\u{1f622}'], "Basic_Emoji ==> \u{1f622}"),
  (&['\u{1f622}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f622}"),
  (&['\u{1f623}'], "Basic_Emoji ==> \u{1f623}"),
  (&['\u{1f623}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f623}"),
  (&['\u{1f624}'], "Basic_Emoji ==> \u{1f624}"),
  (&['\u{1f624}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f624}"),
  (&['\u{1f625}'], "Basic_Emoji ==> \u{1f625}"),
  (&['\u{1f625}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f625}"),
  (&['\u{1f626}'], "Basic_Emoji ==> \u{1f626}"),
  (&['\u{1f626}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f626}"),
  (&['\u{1f627}'], "Basic_Emoji ==> \u{1f627}"),
  (&['\u{1f627}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f627}"),
  (&['\u{1f628}'], "Basic_Emoji ==> \u{1f628}"),
  (&['\u{1f628}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f628}"),
  (&['\u{1f629}'], "Basic_Emoji ==> \u{1f629}"),
  (&['\u{1f629}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f629}"),
  (&['\u{1f62a}'], "Basic_Emoji ==> \u{1f62a}"),
  (&['\u{1f62a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f62a}"),
  (&['\u{1f62b}'], "Basic_Emoji ==> \u{1f62b}"),
  (&['\u{1f62b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f62b}"),
  (&['\u{1f62c}'], "Basic_Emoji ==> \u{1f62c}"),
  (&['\u{1f62c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f62c}"),
  (&['\u{1f62d}'], "Basic_Emoji ==> \u{1f62d}"),
  (&['\u{1f62d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f62d}"),
  (&['\u{1f62e}'], "Basic_Emoji ==> \u{1f62e}"),
  (&['\u{1f62e}', '\u{200d}', '\u{1f4a8}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f62e}\u{200d}\u{1f4a8}"),
  (&['\u{1f62e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f62e}"),
  (&['\u{1f62f}'], "Basic_Emoji ==> \u{1f62f}"),
  (&['\u{1f62f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f62f}"),
  (&['\u{1f630}'], "Basic_Emoji ==> \u{1f630}"),
  (&['\u{1f630}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f630}"),
  (&['\u{1f631}'], "Basic_Emoji ==> \u{1f631}"),
  (&['\u{1f631}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f631}"),
  (&['\u{1f632}'], "Basic_Emoji ==> \u{1f632}"),
  (&['\u{1f632}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f632}"),
  (&['\u{1f633}'], "Basic_Emoji ==> \u{1f633}"),
  (&['\u{1f633}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f633}"),
  (&['\u{1f634}'], "Basic_Emoji ==> \u{1f634}"),
  (&['\u{1f634}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f634}"),
  (&['\u{1f635}'], "Basic_Emoji ==> \u{1f635}"),
  (&['\u{1f635}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f635}"),
  (&['\u{1f636}'], "Basic_Emoji ==> \u{1f636}"),
  (&['\u{1f636}', '\u{200d}', '\u{1f32b}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f636}\u{200d}\u{1f32b}\u{fe0f}"),
  (&['\u{1f636}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f636}"),
  (&['\u{1f637}'], "Basic_Emoji ==> \u{1f637}"),
  (&['\u{1f637}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f637}"),
  (&['\u{1f638}'], "Basic_Emoji ==> \u{1f638}"),
  (&['\u{1f638}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f638}"),
  (&['\u{1f639}'], "Basic_Emoji ==> \u{1f639}"),
  (&['\u{1f639}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f639}"),
  (&['\u{1f63a}'], "Basic_Emoji ==> \u{1f63a}"),
  (&['\u{1f63a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f63a}"),
  (&['\u{1f63b}'], "Basic_Emoji ==> \u{1f63b}"),
  (&['\u{1f63b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f63b}"),
  (&['\u{1f63c}'], "Basic_Emoji ==> \u{1f63c}"),
  (&['\u{1f63c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f63c}"),
  (&['\u{1f63d}'], "Basic_Emoji ==> \u{1f63d}"),
  (&['\u{1f63d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f63d}"),
  (&['\u{1f63e}'], "Basic_Emoji ==> \u{1f63e}"),
  (&['\u{1f63e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f63e}"),
  (&['\u{1f63f}'], "Basic_Emoji ==> \u{1f63f}"),
  (&['\u{1f63f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f63f}"),
  (&['\u{1f640}'], "Basic_Emoji ==> \u{1f640}"),
  (&['\u{1f640}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f640}"),
  (&['\u{1f641}'], "Basic_Emoji ==> \u{1f641}"),
  (&['\u{1f641}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f641}"),
  (&['\u{1f642}'], "Basic_Emoji ==> \u{1f642}"),
  (&['\u{1f642}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f642}"),
  (&['\u{1f643}'], "Basic_Emoji ==> \u{1f643}"),
  (&['\u{1f643}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f643}"),
  (&['\u{1f644}'], "Basic_Emoji ==> \u{1f644}"),
  (&['\u{1f644}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f644}"),
  (&['\u{1f645}'], "Basic_Emoji ==> \u{1f645}"),
  (&['\u{1f645}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f645}"),
  (&['\u{1f646}'], "Basic_Emoji ==> \u{1f646}"),
  (&['\u{1f646}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f646}"),
  (&['\u{1f647}'], "Basic_Emoji ==> \u{1f647}"),
  (&['\u{1f647}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f647}"),
  (&['\u{1f648}'], "Basic_Emoji ==> \u{1f648}"),
  (&['\u{1f648}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f648}"),
  (&['\u{1f649}'], "Basic_Emoji ==> \u{1f649}"),
  (&['\u{1f649}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f649}"),
  (&['\u{1f64a}'], "Basic_Emoji ==> \u{1f64a}"),
  (&['\u{1f64a}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f64a}"),
  (&['\u{1f64b}'], "Basic_Emoji ==> \u{1f64b}"),
  (&['\u{1f64b}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f64b}"),
  (&['\u{1f64c}'], "Basic_Emoji ==> \u{1f64c}"),
  (&['\u{1f64c}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f64c}"),
  (&['\u{1f64d}'], "Basic_Emoji ==> \u{1f64d}"),
  (&['\u{1f64d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f64d}"),
  (&['\u{1f64e}'], "Basic_Emoji ==> \u{1f64e}"),
  (&['\u{1f64e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f64e}"),
  (&['\u{1f64f}'], "Basic_Emoji ==> \u{1f64f}"),
  (&['\u{1f64f}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f64f}"),
  (&['\u{1f680}'], "Basic_Emoji ==> \u{1f680}"),
  (&['\u{1f680}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f680}"),
  (&['\u{1f91d}'], "Basic_Emoji ==> \u{1f91d}"),
  (&['\u{1f91d}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f91d}"),
  (&['\u{1f937}'], "Basic_Emoji ==> \u{1f937}"),
  (&['\u{1f937}', '\u{200d}', '\u{2640}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f937}\u{200d}\u{2640}\u{fe0f}"),
  (&['\u{1f937}', '\u{200d}', '\u{2642}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f937}\u{200d}\u{2642}\u{fe0f}"),
  (&['\u{1f937}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f937}"),
  (&['\u{1f937}', '\u{1f3fb}', '\u{200d}', '\u{2640}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f937}\u{1f3fb}\u{200d}\u{2640}\u{fe0f}"),
  (&['\u{1f937}', '\u{1f3fb}', '\u{200d}', '\u{2642}', '\u{fe0f}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f937}\u{1f3fb}\u{200d}\u{2642}\u{fe0f}"),
  (&['\u{1f98e}'], "Basic_Emoji ==> \u{1f98e}"),
  (&['\u{1f98e}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f98e}"),
  (&['\u{1f9d1}'], "Basic_Emoji ==> \u{1f9d1}"),
  (&['\u{1f9d1}', '\u{200d}', '\u{1f680}'], "RGI_Emoji_ZWJ_Sequence ==> \u{1f9d1}\u{200d}\u{1f680}"),
  (&['\u{1f9d1}', '\u{fe0e}'], "Basic_Emoji ==> \u{1f9d1}"),
  (&['\u{1f9d1}', '\u{1f3fb}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f9d1}\u{1f3fb}"),
  (&['\u{1f9d1}', '\u{1f3fc}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f9d1}\u{1f3fc}"),
  (&['\u{1f9d1}', '\u{1f3fd}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f9d1}\u{1f3fd}"),
  (&['\u{1f9d1}', '\u{1f3fe}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f9d1}\u{1f3fe}"),
  (&['\u{1f9d1}', '\u{1f3ff}'], "RGI_Emoji_Modifier_Sequence ==> \u{1f9d1}\u{1f3ff}"),
  (&['\u{1fae0}'], "Basic_Emoji ==> \u{1fae0}"),
  (&['\u{1fae0}', '\u{fe0e}'], "Basic_Emoji ==> \u{1fae0}"),
];
