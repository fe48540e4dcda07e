use super::Post;
use crate::domain::types::Category;
use time::macros::date;

pub static POSTS: [Post; 8] = [
    Post {
        id: 1,
        title: "Ergenlikte Ebeveyn-Çocuk İletişimi",
        excerpt: "Ergenlik döneminde iletişimi güçlendirmek için ailelerin uygulayabileceği somut adımlar.",
        content: "Ergenlik, çocuğun kimlik arayışının yoğunlaştığı ve aileyle ilişkilerin yeniden şekillendiği bir dönemdir. Bu süreçte ebeveynlerin en sık yaşadığı zorluk, çocuklarının artık eskisi kadar konuşmak istememesidir.

Etkin dinleme, bu dönemin en güçlü aracıdır. Çocuğunuz konuşurken sözünü kesmeden, yargılamadan ve hemen çözüm üretmeye çalışmadan dinlemek, ona duygularının önemli olduğunu gösterir.

Sınırlar konusunda tutarlı olmak da en az dinlemek kadar önemlidir. Kuralları birlikte belirlemek, ergenin sorumluluk almasını kolaylaştırır ve çatışmaları azaltır.

Son olarak, haftada en az bir kez telefonların kapalı olduğu ortak bir aile zamanı planlamak, iletişim kanallarını açık tutmanın basit ama etkili bir yoludur.",
        image: "https://images.unsplash.com/photo-1511895426328-dc8714191300?w=1200",
        category: Category::Aile,
        date: date!(2024 - 03 - 15),
    },
    Post {
        id: 2,
        title: "Sınav Kaygısıyla Baş Etme Yolları",
        excerpt: "Öğrencilerin sınav öncesi ve sınav anında kaygıyı yönetmesine yardımcı olan stratejiler.",
        content: "Sınav kaygısı, öğrencilerin bildiklerini sınav anında ortaya koymalarını zorlaştıran yaygın bir durumdur. Belirli düzeyde kaygı performansı artırsa da aşırı kaygı dikkati dağıtır.

Düzenli bir çalışma planı, belirsizliği azaltarak kaygının temel kaynaklarından birini ortadan kaldırır. Konuları küçük parçalara bölmek ve tekrarları takvime yaymak iyi bir başlangıçtır.

Sınav sabahı yapılan nefes egzersizleri bedenin alarm tepkisini yatıştırır. Dört saniye nefes alıp dört saniye tutmak ve altı saniyede vermek, kalp atışını kısa sürede düzenler.",
        image: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=1200",
        category: Category::Okul,
        date: date!(2024 - 02 - 28),
    },
    Post {
        id: 3,
        title: "Boşanma Sürecinde Çocuklarla Konuşmak",
        excerpt: "Ayrılık kararını çocuklara açıklarken dikkat edilmesi gereken noktalar.",
        content: "Boşanma, yalnızca eşler için değil çocuklar için de büyük bir değişimdir. Çocukların bu değişime uyum sağlayabilmesi, kararın onlara nasıl anlatıldığıyla yakından ilişkilidir.

Açıklamayı mümkünse iki ebeveynin birlikte yapması, çocuğa ailenin hâlâ onun için bir arada durabildiği mesajını verir. Yaşına uygun, kısa ve dürüst cümleler kurmak gerekir.

Çocuklar sıklıkla ayrılığın kendi suçları olduğunu düşünür. Bu nedenle kararın yetişkinler arasında verildiğini ve onların davranışlarıyla ilgisi olmadığını açıkça ve tekrar tekrar söylemek önemlidir.

Günlük rutinleri korumak, okul, uyku ve yemek saatlerini olabildiğince sabit tutmak, belirsizlik döneminde çocuğa güven veren bir çerçeve sunar.

Çocuğun her iki ebeveynle de ilişkisini sürdürmesine alan açmak ve diğer ebeveyni çocuğun yanında eleştirmemek, uzun vadeli uyumun en belirleyici etkenlerindendir. Gerektiğinde bir psikolojik danışmandan destek almak hem çocuk hem de ebeveynler için süreci kolaylaştırır.",
        image: "https://images.unsplash.com/photo-1476703993599-0035a21b17a9?w=1200",
        category: Category::Aile,
        date: date!(2024 - 02 - 10),
    },
    Post {
        id: 4,
        title: "Kardeş Kıskançlığını Anlamak",
        excerpt: "Yeni bir kardeşin gelişiyle ortaya çıkan kıskançlık davranışlarına yaklaşım önerileri.",
        content: "Kardeş kıskançlığı, çocuğun ebeveyn sevgisini paylaşmak zorunda kalmasına verdiği doğal bir tepkidir. Bu duyguyu yok saymak yerine adlandırmak çocuğun onu düzenlemesine yardım eder.

Her çocuğa ayrı ve kısa da olsa kesintisiz bir zaman ayırmak, kıyaslamalardan kaçınmak ve büyük kardeşe bebeğin bakımında yaşına uygun sorumluluklar vermek kıskançlığı yumuşatır.",
        image: "https://images.unsplash.com/photo-1503454537195-1dcabb73ffb9?w=1200",
        category: Category::Aile,
        date: date!(2024 - 01 - 22),
    },
    Post {
        id: 5,
        title: "Ailede Ekran Süresi Kuralları",
        excerpt: "Dijital cihaz kullanımını aile içinde dengelemek için uygulanabilir kurallar.",
        content: "Ekranlar günlük yaşamın ayrılmaz bir parçası hâline geldi. Amaç ekranları tamamen yasaklamak değil, kullanımı ailenin değerleriyle uyumlu hâle getirmektir.

Yemek masası ve yatak odası gibi ekransız alanlar belirlemek, kuralların herkes için geçerli olması ve ebeveynlerin örnek olması bu dengenin temelini oluşturur.",
        image: "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=1200",
        category: Category::Aile,
        date: date!(2024 - 01 - 05),
    },
    Post {
        id: 6,
        title: "Kendinize Şefkatle Yaklaşmak",
        excerpt: "Öz şefkatin psikolojik dayanıklılığa katkısı ve günlük pratikler.",
        content: "Öz şefkat, zorlandığımız anlarda kendimize bir arkadaşımıza davrandığımız kadar anlayışlı davranabilmektir. Araştırmalar öz şefkatin kaygı ve depresyon belirtileriyle ters yönde ilişkili olduğunu gösteriyor.

Gün sonunda kendinize iyi gelen üç şeyi yazmak ya da hata yaptığınızda iç sesinizin tonunu fark etmek, öz şefkati geliştirmek için küçük ama etkili adımlardır.",
        image: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=1200",
        category: Category::Bireysel,
        date: date!(2023 - 12 - 18),
    },
    Post {
        id: 7,
        title: "Meslek Seçiminde İlgi ve Yeteneklerin Rolü",
        excerpt: "Kariyer kararlarında kendini tanımanın önemi ve yararlanılabilecek araçlar.",
        content: "Doğru meslek seçimi, kişinin ilgi alanları, yetenekleri ve değerleri arasında bir denge kurmasını gerektirir. Yalnızca popüler ya da yüksek kazançlı görünen mesleklere yönelmek uzun vadede doyumsuzluğa yol açabilir.

İlgi envanterleri, gönüllü çalışmalar ve meslek sahipleriyle yapılan görüşmeler, öğrencinin seçeneklerini somut deneyimlerle sınamasına olanak tanır.",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=1200",
        category: Category::Kariyer,
        date: date!(2023 - 11 - 30),
    },
    Post {
        id: 8,
        title: "Aile Toplantıları ile Ortak Karar Almak",
        excerpt: "Düzenli aile toplantılarının iletişime ve sorumluluk paylaşımına etkisi.",
        content: "Aile toplantıları, her bireyin söz hakkı bulduğu ve kararların birlikte alındığı düzenli buluşmalardır. Haftalık kısa bir toplantı, birikmiş sorunların büyümeden konuşulmasını sağlar.

Toplantıya bir teşekkür turuyla başlamak, gündemi önceden birlikte belirlemek ve alınan kararları görünür bir yere yazmak süreci kalıcı kılar.",
        image: "https://images.unsplash.com/photo-1609220136736-443140cffec6?w=1200",
        category: Category::Aile,
        date: date!(2023 - 11 - 12),
    },
];
